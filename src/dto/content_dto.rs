use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::company_details::NewCompanyDetails;
use crate::model::feature::{FeatureUpdate, NewFeature};
use crate::model::service::{NewService, ServiceUpdate};
use crate::model::testimonial::{NewTestimonial, TestimonialUpdate};

// --- Services ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(length(min = 1))]
    pub icon: String,

    pub features: Vec<String>,
}

impl From<CreateServiceRequest> for NewService {
    fn from(req: CreateServiceRequest) -> Self {
        NewService {
            title: req.title,
            description: req.description,
            icon: req.icon,
            features: req.features,
        }
    }
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    #[validate(length(min = 1))]
    pub icon: Option<String>,

    pub features: Option<Vec<String>>,
}

impl From<UpdateServiceRequest> for ServiceUpdate {
    fn from(req: UpdateServiceRequest) -> Self {
        ServiceUpdate {
            title: req.title,
            description: req.description,
            icon: req.icon,
            features: req.features,
        }
    }
}

// --- Features ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFeatureRequest {
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(length(min = 1))]
    pub icon: String,
}

impl From<CreateFeatureRequest> for NewFeature {
    fn from(req: CreateFeatureRequest) -> Self {
        NewFeature {
            title: req.title,
            description: req.description,
            icon: req.icon,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateFeatureRequest {
    #[validate(length(min = 1))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    #[validate(length(min = 1))]
    pub icon: Option<String>,
}

impl From<UpdateFeatureRequest> for FeatureUpdate {
    fn from(req: UpdateFeatureRequest) -> Self {
        FeatureUpdate {
            title: req.title,
            description: req.description,
            icon: req.icon,
        }
    }
}

// --- Testimonials ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTestimonialRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub position: String,

    #[validate(length(min = 1))]
    pub company: String,

    #[validate(length(min = 1))]
    pub content: String,

    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
}

impl From<CreateTestimonialRequest> for NewTestimonial {
    fn from(req: CreateTestimonialRequest) -> Self {
        NewTestimonial {
            name: req.name,
            position: req.position,
            company: req.company,
            content: req.content,
            rating: req.rating,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTestimonialRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,

    #[validate(length(min = 1))]
    pub position: Option<String>,

    #[validate(length(min = 1))]
    pub company: Option<String>,

    #[validate(length(min = 1))]
    pub content: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,
}

impl From<UpdateTestimonialRequest> for TestimonialUpdate {
    fn from(req: UpdateTestimonialRequest) -> Self {
        TestimonialUpdate {
            name: req.name,
            position: req.position,
            company: req.company,
            content: req.content,
            rating: req.rating,
        }
    }
}

// --- Company details ---

/// Full payload: the singleton is rewritten as a whole on every update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyDetailsRequest {
    #[validate(length(min = 1))]
    pub address: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub phone: String,

    #[serde(default)]
    pub social_links: Vec<String>,
}

impl From<UpdateCompanyDetailsRequest> for NewCompanyDetails {
    fn from(req: UpdateCompanyDetailsRequest) -> Self {
        NewCompanyDetails {
            address: req.address,
            email: req.email,
            phone: req.phone,
            social_links: req.social_links,
        }
    }
}
