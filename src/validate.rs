use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::employee::{EmployeeForm, ImageFile};
use crate::types::request::LoginRequest;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static CONTACT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

pub const MIN_PASSWORD_LEN: usize = 6;

/// Profile pictures larger than this are refused before upload.
pub const MAX_IMAGE_SIZE: usize = 1024 * 1024;

pub const MSG_FIELDS_REQUIRED: &str = "All fields are required";
pub const MSG_INVALID_EMAIL: &str = "Invalid email format";
pub const MSG_INVALID_CONTACT: &str = "Invalid phone number format (10 digits only)";
pub const MSG_LOGIN_REQUIRED: &str = "Email and password are required";
pub const MSG_SHORT_PASSWORD: &str = "Password must be at least 6 characters long";
pub const MSG_IMAGE_TOO_LARGE: &str = "Image size must be less than 1MB";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_contact(contact: &str) -> bool {
    CONTACT_REGEX.is_match(contact)
}

/// Checks an employee form, returning the message to show the user on failure.
pub fn validate_employee(form: &EmployeeForm) -> Result<(), &'static str> {
    let required = [
        &form.employee_code,
        &form.first_name,
        &form.last_name,
        &form.email_id,
        &form.contact_no,
        &form.department,
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err(MSG_FIELDS_REQUIRED);
    }
    if !is_valid_email(&form.email_id) {
        return Err(MSG_INVALID_EMAIL);
    }
    if !is_valid_contact(&form.contact_no) {
        return Err(MSG_INVALID_CONTACT);
    }
    Ok(())
}

pub fn validate_login(req: &LoginRequest) -> Result<(), &'static str> {
    if req.email_id.is_empty() || req.password.is_empty() {
        return Err(MSG_LOGIN_REQUIRED);
    }
    if !is_valid_email(&req.email_id) {
        return Err(MSG_INVALID_EMAIL);
    }
    // Length in UTF-16 code units, as the server counts it
    if req.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(MSG_SHORT_PASSWORD);
    }
    Ok(())
}

pub fn validate_image(image: &ImageFile) -> Result<(), &'static str> {
    if image.data.len() > MAX_IMAGE_SIZE {
        return Err(MSG_IMAGE_TOO_LARGE);
    }
    Ok(())
}
