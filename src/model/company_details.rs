use serde::{Deserialize, Serialize};

/// Singleton record: the store holds at most one of these, and its id never
/// changes once assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetails {
    pub id: u32,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub social_links: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewCompanyDetails {
    pub address: String,
    pub email: String,
    pub phone: String,
    pub social_links: Vec<String>,
}
