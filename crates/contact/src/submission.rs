use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

/// One of the four visitor-editable inputs of the contact form.
///
/// Parses from (and displays as) the HTML input name.
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn hint(&self) -> &'static str {
        match self {
            Field::Name => "Please tell me your name.",
            Field::Email => "Please enter a valid email address.",
            Field::Subject => "Please add a subject.",
            Field::Message => "Please write a message.",
        }
    }
}

#[derive(Validate, Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::VARIANTS.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields failing validation, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        let Err(errors) = self.validate() else {
            return vec![];
        };

        let failed = errors.field_errors();

        Field::VARIANTS
            .iter()
            .copied()
            .filter(|f| failed.contains_key(f.as_ref()))
            .collect()
    }

    /// Input-layer check run before anything is relayed.
    pub fn check(&self) -> crate::Result<()> {
        self.validate()?;

        Ok(())
    }

    /// Freezes the current values into the payload sent to the relay.
    pub fn freeze(&self, access_key: &str) -> ContactPayload {
        ContactPayload {
            access_key: access_key.to_owned(),
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            subject: self.subject.to_owned(),
            message: self.message.to_owned(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
