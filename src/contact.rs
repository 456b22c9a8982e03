// SPDX-License-Identifier: MPL-2.0
//! Contact inquiry form state and phone-number formatting.
//!
//! The phone field reformats on every keystroke into the Russian national
//! format, `+7 (XXX) XXX-XX-XX`. A leading `7` or `8` is treated as the
//! country prefix and dropped; anything beyond ten significant digits is
//! ignored.

use crate::api::ContactRequest;
use crate::error::{Error, Result};

/// Contact form fields plus the in-flight flag for the submit button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub sending: bool,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    /// Stores the phone field after reformatting the raw input.
    pub fn set_phone(&mut self, raw: &str) {
        self.phone = format_phone(raw);
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_message(&mut self, value: String) {
        self.message = value;
    }

    /// Validates the form and builds the request payload.
    ///
    /// Runs before any network call; a failure leaves the form untouched.
    pub fn to_request(&self) -> Result<ContactRequest> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::Validation("Please enter your name".to_string()));
        }
        if self.phone.trim().is_empty() {
            return Err(Error::Validation(
                "Please enter your phone number".to_string(),
            ));
        }

        let email = self.email.trim();
        Ok(ContactRequest {
            name: name.to_string(),
            phone: self.phone.clone(),
            email: if email.is_empty() {
                None
            } else {
                Some(email.to_string())
            },
            message: self.message.trim().to_string(),
        })
    }

    /// Clears every field after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Formats arbitrary input as `+7 (XXX) XXX-XX-XX`, progressively while the
/// number is still incomplete. Returns an empty string when no significant
/// digits remain.
pub fn format_phone(raw: &str) -> String {
    let mut digits: Vec<u8> = raw
        .bytes()
        .filter(|b| b.is_ascii_digit())
        .map(|b| b - b'0')
        .collect();

    // Country prefix: both 7 and 8 mean "Russia" in user input.
    if matches!(digits.first(), Some(7 | 8)) {
        digits.remove(0);
    }
    digits.truncate(10);

    if digits.is_empty() {
        return String::new();
    }

    let chunk = |range: std::ops::Range<usize>| -> String {
        digits[range.start..range.end.min(digits.len())]
            .iter()
            .map(|d| char::from(b'0' + d))
            .collect()
    };

    let mut formatted = format!("+7 ({}", chunk(0..3));
    if digits.len() >= 4 {
        formatted.push_str(&format!(") {}", chunk(3..6)));
    }
    if digits.len() >= 7 {
        formatted.push_str(&format!("-{}", chunk(6..8)));
    }
    if digits.len() >= 9 {
        formatted.push_str(&format!("-{}", chunk(8..10)));
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_number_with_leading_eight() {
        assert_eq!(format_phone("89161234567"), "+7 (916) 123-45-67");
    }

    #[test]
    fn formats_full_number_with_leading_seven() {
        assert_eq!(format_phone("79161234567"), "+7 (916) 123-45-67");
    }

    #[test]
    fn formats_bare_ten_digits() {
        assert_eq!(format_phone("9161234567"), "+7 (916) 123-45-67");
    }

    #[test]
    fn reformats_already_formatted_input() {
        assert_eq!(format_phone("+7 (916) 123-45-67"), "+7 (916) 123-45-67");
    }

    #[test]
    fn partial_numbers_format_progressively() {
        assert_eq!(format_phone("9"), "+7 (9");
        assert_eq!(format_phone("916"), "+7 (916");
        assert_eq!(format_phone("9161"), "+7 (916) 1");
        assert_eq!(format_phone("9161234"), "+7 (916) 123-4");
        assert_eq!(format_phone("916123456"), "+7 (916) 123-45-6");
    }

    #[test]
    fn empty_and_prefix_only_input_clears_field() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("8"), "");
        assert_eq!(format_phone("+7"), "");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn excess_digits_are_ignored() {
        assert_eq!(format_phone("8916123456789012"), "+7 (916) 123-45-67");
    }

    #[test]
    fn setter_reformats_on_each_keystroke() {
        let mut form = Form::new();
        form.set_phone("8916");
        assert_eq!(form.phone, "+7 (916");
        form.set_phone("89161234567");
        assert_eq!(form.phone, "+7 (916) 123-45-67");
    }

    #[test]
    fn request_requires_name_and_phone() {
        let mut form = Form::new();
        assert!(form.to_request().is_err());

        form.set_name("Ivan".to_string());
        assert!(form.to_request().is_err());

        form.set_phone("89161234567");
        let request = form.to_request().expect("expected valid request");
        assert_eq!(request.name, "Ivan");
        assert_eq!(request.phone, "+7 (916) 123-45-67");
        assert_eq!(request.email, None);
    }

    #[test]
    fn request_carries_trimmed_email_when_present() {
        let mut form = Form::new();
        form.set_name("Ivan".to_string());
        form.set_phone("89161234567");
        form.set_email(" ivan@example.com ".to_string());
        form.set_message("Need boxes".to_string());

        let request = form.to_request().expect("expected valid request");
        assert_eq!(request.email.as_deref(), Some("ivan@example.com"));
        assert_eq!(request.message, "Need boxes");
    }

    #[test]
    fn reset_clears_all_fields() {
        let mut form = Form::new();
        form.set_name("Ivan".to_string());
        form.set_phone("89161234567");
        form.sending = true;

        form.reset();
        assert_eq!(form, Form::new());
    }
}