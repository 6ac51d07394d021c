use serde::{Deserialize, Serialize};

/// "About us" highlight card shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone)]
pub struct NewFeature {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default)]
pub struct FeatureUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}
