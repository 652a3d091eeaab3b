//! User registration form rules.
//!
//! Pure validation over field values and file metadata; the file bytes
//! themselves never enter this layer. The presentation layer renders the
//! collected messages next to each field.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;
const CONTACT_MIN: usize = 10;
const CONTACT_MAX: usize = 15;
const ADDRESS_MIN: usize = 5;
const ADDRESS_MAX: usize = 200;
const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;
const MAX_CV_BYTES: u64 = 10 * 1024 * 1024;

const PHOTO_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];
const CV_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static CONTACT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[\d\s-]+$").unwrap());

/// Metadata of an uploaded file. Only name, size, and declared content type
/// are validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Raw user-form input as submitted by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub address: String,
    pub photo: FileMeta,
    pub cv: FileMeta,
}

/// A single failed rule, addressed to the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// An accepted submission, stamped at acceptance time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedUserData {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub address: String,
    pub photo: FileMeta,
    pub cv: FileMeta,
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
}

/// Check every rule and collect all violations rather than stopping at the
/// first one, so the form can show errors per field.
pub fn validate(form: &UserForm) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if name.chars().count() < NAME_MIN {
        errors.push(FieldError::new(
            "name",
            "Name must be at least 2 characters",
        ));
    } else if name.chars().count() > NAME_MAX {
        errors.push(FieldError::new(
            "name",
            "Name must be less than 50 characters",
        ));
    } else if !NAME_RE.is_match(name) {
        errors.push(FieldError::new(
            "name",
            "Name can only contain letters and spaces",
        ));
    }

    if !EMAIL_RE.is_match(form.email.trim()) {
        errors.push(FieldError::new(
            "email",
            "Please enter a valid email address",
        ));
    }

    let contact = form.contact.trim();
    if contact.chars().count() < CONTACT_MIN {
        errors.push(FieldError::new(
            "contact",
            "Contact number must be at least 10 digits",
        ));
    } else if contact.chars().count() > CONTACT_MAX {
        errors.push(FieldError::new(
            "contact",
            "Contact number must be less than 15 digits",
        ));
    } else if !CONTACT_RE.is_match(contact) {
        errors.push(FieldError::new(
            "contact",
            "Please enter a valid contact number",
        ));
    }

    let address = form.address.trim();
    if address.chars().count() < ADDRESS_MIN {
        errors.push(FieldError::new(
            "address",
            "Address must be at least 5 characters",
        ));
    } else if address.chars().count() > ADDRESS_MAX {
        errors.push(FieldError::new(
            "address",
            "Address must be less than 200 characters",
        ));
    }

    validate_file(&mut errors, "photo", &form.photo, MAX_PHOTO_BYTES, &PHOTO_TYPES,
        "Photo is required",
        "Max file size is 5MB",
        "Only .jpg, .jpeg, .png and .gif formats are supported",
    );
    validate_file(&mut errors, "cv", &form.cv, MAX_CV_BYTES, &CV_TYPES,
        "CV file is required",
        "Max file size is 10MB",
        "Only PDF and Word documents are allowed",
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[allow(clippy::too_many_arguments)]
fn validate_file(
    errors: &mut Vec<FieldError>,
    field: &str,
    file: &FileMeta,
    max_bytes: u64,
    allowed_types: &[&str],
    required_msg: &str,
    size_msg: &str,
    type_msg: &str,
) {
    if file.name.is_empty() {
        errors.push(FieldError::new(field, required_msg));
        return;
    }
    if file.size > max_bytes {
        errors.push(FieldError::new(field, size_msg));
    }
    if !allowed_types.contains(&file.content_type.as_str()) {
        errors.push(FieldError::new(field, type_msg));
    }
}

/// Validate and accept a submission, stamping it with the current UTC time.
pub fn accept(form: UserForm) -> Result<SubmittedUserData, Vec<FieldError>> {
    validate(&form)?;
    Ok(SubmittedUserData {
        name: form.name,
        email: form.email,
        contact: form.contact,
        address: form.address,
        photo: form.photo,
        cv: form.cv,
        submitted_at: Utc::now().to_rfc3339(),
    })
}
