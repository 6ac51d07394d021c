pub mod contact_dto;
pub mod content_dto;

use serde::Serialize;

/// Plain `{message}` body used by delete/logout style endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<T: Into<String>>(message: T) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
