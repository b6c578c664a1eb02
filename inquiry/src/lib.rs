//! Shared inquiry model for the contact form.
//!
//! This crate owns the form record, its category list, and the message
//! layout used by both `server` and `client`. The JSON shape of
//! [`InquiryForm`] is the request body of `POST /api/inquiry`.

use serde::{Deserialize, Serialize};

/// Recipient label embedded in every message when none is configured.
pub const DEFAULT_RECIPIENT: &str = "cirrus01@naver.com";

/// Errors produced while editing or validating an inquiry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InquiryError {
    /// One or more required fields are empty.
    #[error("missing required fields: {}", field_list(.0))]
    Incomplete(Vec<Field>),
    /// The category value does not name a known category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// CATEGORY
// =============================================================================

/// Consultation area selected on the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "노동")]
    Labor,
    #[serde(rename = "산재")]
    IndustrialAccident,
    #[serde(rename = "안전")]
    Safety,
    #[serde(rename = "기타")]
    Other,
}

impl Category {
    /// Every category in select-box order.
    pub const ALL: [Self; 4] = [Self::Labor, Self::IndustrialAccident, Self::Safety, Self::Other];

    /// Short label used as the select value and inside the message body.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Labor => "노동",
            Self::IndustrialAccident => "산재",
            Self::Safety => "안전",
            Self::Other => "기타",
        }
    }

    /// Human-facing option text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Labor => "기업 노동 자문",
            Self::IndustrialAccident => "산업재해 보상",
            Self::Safety => "산업안전 컨설팅",
            Self::Other => "기타/외국인 등",
        }
    }

    /// Parse a short value label.
    ///
    /// # Errors
    ///
    /// Returns [`InquiryError::UnknownCategory`] for anything that is not
    /// one of the four value labels.
    pub fn from_value(raw: &str) -> Result<Self, InquiryError> {
        Self::ALL
            .into_iter()
            .find(|c| c.value() == raw)
            .ok_or_else(|| InquiryError::UnknownCategory(raw.to_owned()))
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// Editable form fields, named as they appear on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "companyName")]
    CompanyName,
    #[serde(rename = "contactName")]
    ContactName,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "type")]
    Category,
    #[serde(rename = "message")]
    Message,
}

impl Field {
    /// Fields that must be non-empty before submission.
    pub const REQUIRED: [Self; 5] = [Self::CompanyName, Self::ContactName, Self::Phone, Self::Email, Self::Message];

    /// Wire name of the field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::ContactName => "contactName",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Category => "type",
            Self::Message => "message",
        }
    }
}

// =============================================================================
// FORM
// =============================================================================

/// A single consultation request as entered on the contact page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryForm {
    pub company_name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub message: String,
}

impl InquiryForm {
    /// Replace one field's value, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns [`InquiryError::UnknownCategory`] when `field` is
    /// [`Field::Category`] and `value` is not a known value label. The form
    /// is unchanged in that case.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<(), InquiryError> {
        let value = value.into();
        match field {
            Field::CompanyName => self.company_name = value,
            Field::ContactName => self.contact_name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Category => self.category = Category::from_value(&value)?,
            Field::Message => self.message = value,
        }
        Ok(())
    }

    /// Current text of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CompanyName => &self.company_name,
            Field::ContactName => &self.contact_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Category => self.category.value(),
            Field::Message => &self.message,
        }
    }

    /// Required fields left empty, in form order.
    ///
    /// Presence only: whitespace counts as a value, matching the browser's
    /// `required` check.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Check that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns [`InquiryError::Incomplete`] listing the empty fields.
    pub fn validate(&self) -> Result<(), InquiryError> {
        let missing = self.missing_fields();
        if missing.is_empty() { Ok(()) } else { Err(InquiryError::Incomplete(missing)) }
    }
}

/// Render the notification text for an inquiry.
///
/// The body uses Telegram's legacy Markdown (`*bold*`). Field values are
/// inserted verbatim. `recipient` is a label only.
#[must_use]
pub fn compose_message(form: &InquiryForm, recipient: &str) -> String {
    format!(
        "🔔 *[새로운 상담 신청]*\n\
         ➡ *수신자*: {recipient}\n\
         \n\
         🏢 *회사명*: {}\n\
         👤 *담당자*: {}\n\
         📞 *연락처*: {}\n\
         📧 *이메일*: {}\n\
         📑 *분야*: {}\n\
         \n\
         📝 *상세 내용*:\n\
         {}\n",
        form.company_name,
        form.contact_name,
        form.phone,
        form.email,
        form.category.value(),
        form.message,
    )
}

// =============================================================================
// WIRE RESPONSE
// =============================================================================

/// Response body of `POST /api/inquiry`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<Field>,
}

impl SubmitResponse {
    #[must_use]
    pub fn accepted() -> Self {
        Self { ok: true, missing: Vec::new() }
    }

    #[must_use]
    pub fn incomplete(missing: Vec<Field>) -> Self {
        Self { ok: false, missing }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
