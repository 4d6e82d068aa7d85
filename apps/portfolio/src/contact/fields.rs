use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four contact form fields, exactly as typed.
///
/// No trimming or format checks happen here. The HTML form marks every input
/// `required` and the email input `type="email"`; nothing is re-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactFormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Addresses one field of `ContactFormFields` by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl ContactFormFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Subject => &mut self.subject,
            FieldName::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_parses_known_names() {
        assert_eq!("name".parse::<FieldName>().unwrap(), FieldName::Name);
        assert_eq!("message".parse::<FieldName>().unwrap(), FieldName::Message);
    }

    #[test]
    fn test_field_name_rejects_unknown_and_case_variants() {
        assert_eq!(
            "phone".parse::<FieldName>().unwrap_err(),
            UnknownField("phone".to_string())
        );
        assert!("Email".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_set_last_write_wins_per_field() {
        let mut fields = ContactFormFields::default();
        fields.set(FieldName::Email, "a@example.com".to_string());
        fields.set(FieldName::Name, "Jane".to_string());
        fields.set(FieldName::Email, "b@example.com".to_string());
        fields.set(FieldName::Subject, "Hi".to_string());
        fields.set(FieldName::Name, "Jane Doe".to_string());

        assert_eq!(fields.name, "Jane Doe");
        assert_eq!(fields.email, "b@example.com");
        assert_eq!(fields.subject, "Hi");
        assert_eq!(fields.message, "");
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let mut fields = ContactFormFields::default();
        fields.set(FieldName::Message, "  <b>hi</b>\n ".to_string());
        assert_eq!(fields.get(FieldName::Message), "  <b>hi</b>\n ");
    }

    #[test]
    fn test_deserialize_rejects_extra_keys_and_defaults_missing() {
        let partial: ContactFormFields = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
        assert_eq!(partial.name, "Jane");
        assert!(partial.message.is_empty());

        let extra = serde_json::from_str::<ContactFormFields>(r#"{"name":"Jane","phone":"1"}"#);
        assert!(extra.is_err());
    }

    #[test]
    fn test_clear_empties_every_field() {
        let mut fields = ContactFormFields {
            name: "a".into(),
            email: "b".into(),
            subject: "c".into(),
            message: "d".into(),
        };
        fields.clear();
        assert_eq!(fields, ContactFormFields::default());
    }
}
