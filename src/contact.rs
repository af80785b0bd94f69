use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const CONTACT_ENDPOINT: &str = "/api/contact";
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Field name -> first problem found for that field.
pub type ContactErrors = BTreeMap<&'static str, &'static str>;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

pub fn check_name(name: &str) -> Option<&'static str> {
    let name = name.trim();
    if name.is_empty() {
        Some("Name is required")
    } else if name.chars().count() < 2 {
        Some("Name must be at least 2 characters long")
    } else {
        None
    }
}

pub fn check_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Email is required")
    } else if !email_re().is_match(email) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

pub fn check_subject(subject: &str) -> Option<&'static str> {
    let subject = subject.trim();
    if subject.is_empty() {
        Some("Subject is required")
    } else if subject.chars().count() < 3 {
        Some("Subject must be at least 3 characters long")
    } else {
        None
    }
}

pub fn check_message(message: &str) -> Option<&'static str> {
    let message = message.trim();
    let len = message.chars().count();
    if message.is_empty() {
        Some("Message is required")
    } else if len < MESSAGE_MIN {
        Some("Message must be at least 10 characters long")
    } else if len > MESSAGE_MAX {
        Some("Message must be less than 1000 characters")
    } else {
        None
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactErrors> {
        let mut errors = ContactErrors::new();
        for (field, problem) in [
            ("name", check_name(&self.name)),
            ("email", check_email(&self.email)),
            ("subject", check_subject(&self.subject)),
            ("message", check_message(&self.message)),
        ] {
            if let Some(msg) = problem {
                errors.insert(field, msg);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "I would like to talk.".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors["name"], "Name is required");
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["subject"], "Subject is required");
        assert_eq!(errors["message"], "Message is required");
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(check_email("ada@example"), Some("Please enter a valid email address"));
        assert_eq!(check_email("a b@example.com"), Some("Please enter a valid email address"));
        assert_eq!(check_email("ada@example.com"), None);
    }

    #[test]
    fn test_lengths_use_trimmed_text() {
        assert_eq!(check_name("  a  "), Some("Name must be at least 2 characters long"));
        assert_eq!(check_subject(" hi "), Some("Subject must be at least 3 characters long"));
        assert_eq!(check_message("   short   "), Some("Message must be at least 10 characters long"));
        assert_eq!(check_message(&"x".repeat(1001)), Some("Message must be less than 1000 characters"));
        assert_eq!(check_message(&"x".repeat(1000)), None);
    }

    #[test]
    fn test_errors_serialize_as_object() {
        let mut form = valid();
        form.email = "nope".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"email":"Please enter a valid email address"}"#
        );
    }
}
