use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
}

/// Partial update; fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct ServiceUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
}
