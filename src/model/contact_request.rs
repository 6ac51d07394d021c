use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow state of an inbound contact request. New requests always start
/// as `New`; the admin panel moves them forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    New,
    InProgress,
    Completed,
}

impl ContactStatus {
    /// Parses a client-submitted status value. Anything outside the three
    /// known states is rejected by the caller as a bad request.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(ContactStatus::New),
            "in-progress" => Some(ContactStatus::InProgress),
            "completed" => Some(ContactStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::InProgress => "in-progress",
            ContactStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// Public contact-form submission; status and created_at are stamped by
/// the repository, never taken from the client.
#[derive(Debug, Clone)]
pub struct NewContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
}
