//! Consultation Request Form
//!
//! Field names match the form-encoded body the form processor receives:
//! `name`, `email`, `phone`, `test_date`, `message`.

use serde::{Deserialize, Serialize};

use crate::error::{AcademyError, Result};

/// A "Book your free consultation" submission
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Full name (required)
    #[serde(default)]
    pub name: String,

    /// Reply address (required)
    #[serde(default)]
    pub email: String,

    /// Phone number (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Target MCAT date, free text (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_date: Option<String>,

    /// Goals and biggest hurdles (required)
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Trim every field, drop blank optional fields and check the required
    /// ones. Returns the normalized form.
    pub fn validate(&self) -> Result<Self> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        if !is_email(&email) {
            return Err(AcademyError::InvalidEmail(email));
        }
        let message = required("message", &self.message)?;

        Ok(Self {
            name,
            email,
            phone: optional(self.phone.as_deref()),
            test_date: optional(self.test_date.as_deref()),
            message,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        Err(AcademyError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Loose `local@domain.tld` check, same spirit as `<input type="email">`
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && domain.split('.').all(is_domain_label)
}

/// Letters, digits and inner hyphens
fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "  Riya P. ".into(),
            email: "riya@example.com".into(),
            phone: Some("   ".into()),
            test_date: Some(" June 28, 2026 ".into()),
            message: "Aiming for 515+".into(),
        }
    }

    #[test]
    fn test_validate_normalizes() {
        let form = filled().validate().unwrap();
        assert_eq!(form.name, "Riya P.");
        assert_eq!(form.phone, None);
        assert_eq!(form.test_date.as_deref(), Some("June 28, 2026"));
    }

    #[test]
    fn test_missing_required_fields() {
        let mut form = filled();
        form.name = " ".into();
        assert_eq!(form.validate(), Err(AcademyError::MissingField("name")));

        let mut form = filled();
        form.email = String::new();
        assert_eq!(form.validate(), Err(AcademyError::MissingField("email")));

        let mut form = filled();
        form.message = "\n".into();
        assert_eq!(form.validate(), Err(AcademyError::MissingField("message")));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email("hello@futuremdacademy.org"));
        assert!(is_email("a.b+c@mail.example.co"));
        assert!(!is_email("hello"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("hello@example"));
        assert!(!is_email("hello@.com"));
        assert!(!is_email("he llo@example.com"));
        assert!(!is_email("a@b@example.com"));
        assert!(!is_email("a@b..c"));
        assert!(!is_email("a@-.c"));
        assert!(!is_email("a@example.com."));
        assert!(!is_email("a@exa_mple.com"));
        assert!(is_email("a@my-school.edu"));

        let mut form = filled();
        form.email = "not-an-email".into();
        assert!(matches!(form.validate(), Err(AcademyError::InvalidEmail(_))));
    }

    #[test]
    fn test_wire_field_names() {
        let form = filled().validate().unwrap();
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["name"], "Riya P.");
        assert_eq!(json["test_date"], "June 28, 2026");
        assert!(json.get("phone").is_none());
    }
}
