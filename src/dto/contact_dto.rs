use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::contact_request::NewContactRequest;

/// Public contact-form payload. Constraints mirror the form the site
/// renders, so the per-field messages are shown back to the visitor.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactFormRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 1, message = "Please select a service"))]
    pub service: String,

    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl From<ContactFormRequest> for NewContactRequest {
    fn from(form: ContactFormRequest) -> Self {
        NewContactRequest {
            name: form.name,
            email: form.email,
            phone: form.phone,
            service: form.service,
            message: form.message,
        }
    }
}

/// 201 body for an accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmissionResponse {
    pub message: String,
    pub id: u32,
}

/// Status is taken as a raw string and checked against the known states in
/// the handler, so an unknown value gets a targeted 400 instead of a
/// deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateContactStatusRequest {
    pub status: String,
}
