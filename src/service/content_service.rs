use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::model::company_details::{CompanyDetails, NewCompanyDetails};
use crate::model::contact_request::{ContactRequest, ContactStatus, NewContactRequest};
use crate::model::feature::{Feature, FeatureUpdate, NewFeature};
use crate::model::service::{NewService, Service, ServiceUpdate};
use crate::model::testimonial::{NewTestimonial, Testimonial, TestimonialUpdate};
use crate::repository::content_repo::{ContentRepository, MemoryContentRepository};
use crate::util::error::ServiceError;

#[async_trait]
pub trait ContentService: Send + Sync {
    async fn list_services(&self) -> Result<Vec<Service>, ServiceError>;
    async fn create_service(&self, input: NewService) -> Result<Service, ServiceError>;
    async fn update_service(&self, id: u32, update: ServiceUpdate) -> Result<Option<Service>, ServiceError>;
    async fn delete_service(&self, id: u32) -> Result<bool, ServiceError>;

    async fn list_features(&self) -> Result<Vec<Feature>, ServiceError>;
    async fn create_feature(&self, input: NewFeature) -> Result<Feature, ServiceError>;
    async fn update_feature(&self, id: u32, update: FeatureUpdate) -> Result<Option<Feature>, ServiceError>;
    async fn delete_feature(&self, id: u32) -> Result<bool, ServiceError>;

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ServiceError>;
    async fn create_testimonial(&self, input: NewTestimonial) -> Result<Testimonial, ServiceError>;
    async fn update_testimonial(&self, id: u32, update: TestimonialUpdate) -> Result<Option<Testimonial>, ServiceError>;
    async fn delete_testimonial(&self, id: u32) -> Result<bool, ServiceError>;

    async fn list_contact_requests(&self) -> Result<Vec<ContactRequest>, ServiceError>;
    async fn submit_contact_request(&self, input: NewContactRequest) -> Result<ContactRequest, ServiceError>;
    async fn update_contact_request_status(&self, id: u32, status: ContactStatus) -> Result<Option<ContactRequest>, ServiceError>;
    async fn delete_contact_request(&self, id: u32) -> Result<bool, ServiceError>;

    async fn get_company_details(&self) -> Result<Option<CompanyDetails>, ServiceError>;
    async fn update_company_details(&self, input: NewCompanyDetails) -> Result<CompanyDetails, ServiceError>;
}

pub struct ContentServiceImpl {
    pub repo: Arc<MemoryContentRepository>,
}

impl ContentServiceImpl {
    pub fn new(repo: Arc<MemoryContentRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ContentService for ContentServiceImpl {
    async fn list_services(&self) -> Result<Vec<Service>, ServiceError> {
        Ok(self.repo.list_services().await?)
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create_service(&self, input: NewService) -> Result<Service, ServiceError> {
        Ok(self.repo.create_service(input).await?)
    }

    #[instrument(skip(self, update), fields(id = id))]
    async fn update_service(&self, id: u32, update: ServiceUpdate) -> Result<Option<Service>, ServiceError> {
        Ok(self.repo.update_service(id, update).await?)
    }

    #[instrument(skip(self), fields(id = id))]
    async fn delete_service(&self, id: u32) -> Result<bool, ServiceError> {
        Ok(self.repo.delete_service(id).await?)
    }

    async fn list_features(&self) -> Result<Vec<Feature>, ServiceError> {
        Ok(self.repo.list_features().await?)
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create_feature(&self, input: NewFeature) -> Result<Feature, ServiceError> {
        Ok(self.repo.create_feature(input).await?)
    }

    #[instrument(skip(self, update), fields(id = id))]
    async fn update_feature(&self, id: u32, update: FeatureUpdate) -> Result<Option<Feature>, ServiceError> {
        Ok(self.repo.update_feature(id, update).await?)
    }

    #[instrument(skip(self), fields(id = id))]
    async fn delete_feature(&self, id: u32) -> Result<bool, ServiceError> {
        Ok(self.repo.delete_feature(id).await?)
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ServiceError> {
        Ok(self.repo.list_testimonials().await?)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create_testimonial(&self, input: NewTestimonial) -> Result<Testimonial, ServiceError> {
        Ok(self.repo.create_testimonial(input).await?)
    }

    #[instrument(skip(self, update), fields(id = id))]
    async fn update_testimonial(&self, id: u32, update: TestimonialUpdate) -> Result<Option<Testimonial>, ServiceError> {
        Ok(self.repo.update_testimonial(id, update).await?)
    }

    #[instrument(skip(self), fields(id = id))]
    async fn delete_testimonial(&self, id: u32) -> Result<bool, ServiceError> {
        Ok(self.repo.delete_testimonial(id).await?)
    }

    async fn list_contact_requests(&self) -> Result<Vec<ContactRequest>, ServiceError> {
        Ok(self.repo.list_contact_requests().await?)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn submit_contact_request(&self, input: NewContactRequest) -> Result<ContactRequest, ServiceError> {
        Ok(self.repo.create_contact_request(input).await?)
    }

    #[instrument(skip(self), fields(id = id, status = %status))]
    async fn update_contact_request_status(&self, id: u32, status: ContactStatus) -> Result<Option<ContactRequest>, ServiceError> {
        Ok(self.repo.update_contact_request_status(id, status).await?)
    }

    #[instrument(skip(self), fields(id = id))]
    async fn delete_contact_request(&self, id: u32) -> Result<bool, ServiceError> {
        Ok(self.repo.delete_contact_request(id).await?)
    }

    async fn get_company_details(&self) -> Result<Option<CompanyDetails>, ServiceError> {
        Ok(self.repo.get_company_details().await?)
    }

    #[instrument(skip(self, input))]
    async fn update_company_details(&self, input: NewCompanyDetails) -> Result<CompanyDetails, ServiceError> {
        Ok(self.repo.update_company_details(input).await?)
    }
}
