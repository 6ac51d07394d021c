use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
}

#[derive(Debug, Clone)]
pub struct NewTestimonial {
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<u8>,
}
