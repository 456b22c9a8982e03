// SPDX-License-Identifier: MPL-2.0

use postpress_studio::app::{self, Flags};
use postpress_studio::config;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        server: args.opt_value_from_str("--server").unwrap_or(None),
        admin: args.contains("--admin"),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    if let Some(dir) = &flags.config_dir {
        std::env::set_var(config::CONFIG_DIR_ENV, dir);
    }

    app::run(flags)
}
