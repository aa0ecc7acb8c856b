use std::collections::BTreeMap;

use email_address::{EmailAddress, Options};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::macros::nutype_string;

nutype_string!(ContactName(validate(len_char_min = 2)));
nutype_string!(ContactMessageContent(validate(
    len_char_min = 10,
    len_char_max = 500
)));

/// A validated contact form submission.
///
/// Values of this type can only be obtained through [`ContactSubmission::validate`]
/// or from the individual validated field types, so holding one implies that
/// every field constraint holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFieldError {
    #[error("この項目は必須です。")]
    Required,
    #[error("文字列で入力してください。")]
    NotAString,
    #[error("名前は2文字以上で入力してください。")]
    NameTooShort,
    #[error("有効なメールアドレスを入力してください。")]
    EmailInvalid,
    #[error("メッセージは10文字以上で入力してください。")]
    MessageTooShort,
    #[error("メッセージは500文字以内で入力してください。")]
    MessageTooLong,
}

/// Error messages grouped by the field they belong to.
///
/// Serializes as `{"<field>": ["<message>", ...]}` and never contains a field
/// with an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("contact submission is invalid")]
pub struct FieldErrors(BTreeMap<ContactField, Vec<ContactFieldError>>);

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl Serialize for ContactFieldError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: ContactField) -> &[ContactFieldError] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn push(&mut self, field: ContactField, error: ContactFieldError) {
        self.0.entry(field).or_default().push(error);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &[ContactFieldError])> {
        self.0.iter().map(|(field, errors)| (*field, errors.as_slice()))
    }

    /// Records the error of `result` under `field` and returns the success
    /// value, if any.
    fn collect<T>(
        &mut self,
        field: ContactField,
        result: Result<T, ContactFieldError>,
    ) -> Option<T> {
        result.map_err(|err| self.push(field, err)).ok()
    }
}

impl ContactSubmission {
    /// Validates unstructured input against the contact form rules.
    ///
    /// Unknown keys are ignored. Every field is checked, so the returned
    /// [`FieldErrors`] reports all invalid fields at once. Input that is not a
    /// JSON object is treated like an object without any fields.
    pub fn validate(input: &Value) -> Result<Self, FieldErrors> {
        let empty = Map::new();
        let object = input.as_object().unwrap_or(&empty);
        let mut errors = FieldErrors::default();

        let name = errors.collect(
            ContactField::Name,
            string_field(object, ContactField::Name).and_then(validate_name),
        );
        let email = errors.collect(
            ContactField::Email,
            string_field(object, ContactField::Email).and_then(validate_email),
        );
        let message = errors.collect(
            ContactField::Message,
            string_field(object, ContactField::Message).and_then(validate_message),
        );

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(Self {
                name,
                email,
                message,
            }),
            _ => Err(errors),
        }
    }
}

fn string_field(
    object: &Map<String, Value>,
    field: ContactField,
) -> Result<&str, ContactFieldError> {
    match object.get(field.as_str()) {
        None | Some(Value::Null) => Err(ContactFieldError::Required),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(ContactFieldError::NotAString),
    }
}

fn validate_name(name: &str) -> Result<ContactName, ContactFieldError> {
    ContactName::try_new(name).map_err(|_| ContactFieldError::NameTooShort)
}

/// Accepts plain `local@domain.tld` addresses: an ascii local part without
/// quoting, ascii domain labels and an alphabetic top level domain of at least
/// two characters.
fn validate_email(email: &str) -> Result<EmailAddress, ContactFieldError> {
    let options = Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal();
    let address = EmailAddress::parse_with_options(email, options)
        .map_err(|_| ContactFieldError::EmailInvalid)?;

    let local_part_ok = address
        .local_part()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c));
    let domain_ok = address
        .domain()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
    let tld_ok = address
        .domain()
        .rsplit_once('.')
        .is_some_and(|(_, tld)| {
            tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        });

    if local_part_ok && domain_ok && tld_ok {
        Ok(address)
    } else {
        Err(ContactFieldError::EmailInvalid)
    }
}

fn validate_message(message: &str) -> Result<ContactMessageContent, ContactFieldError> {
    ContactMessageContent::try_new(message).map_err(|err| match err {
        ContactMessageContentError::LenCharMinViolated => ContactFieldError::MessageTooShort,
        ContactMessageContentError::LenCharMaxViolated => ContactFieldError::MessageTooLong,
    })
}
