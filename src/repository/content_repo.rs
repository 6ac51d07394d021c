use crate::model::company_details::{CompanyDetails, NewCompanyDetails};
use crate::model::contact_request::{ContactRequest, ContactStatus, NewContactRequest};
use crate::model::feature::{Feature, FeatureUpdate, NewFeature};
use crate::model::service::{NewService, Service, ServiceUpdate};
use crate::model::testimonial::{NewTestimonial, Testimonial, TestimonialUpdate};
use crate::repository::repository_error::RepositoryResult;
use crate::repository::Collection;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

/// Store for the public site content. Absence is a normal outcome: get,
/// update and delete report a missing id as `Ok(None)` / `Ok(false)` and
/// reserve the error path for backends that can actually fail.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn list_services(&self) -> RepositoryResult<Vec<Service>>;
    async fn get_service(&self, id: u32) -> RepositoryResult<Option<Service>>;
    async fn create_service(&self, input: NewService) -> RepositoryResult<Service>;
    async fn update_service(&self, id: u32, update: ServiceUpdate) -> RepositoryResult<Option<Service>>;
    async fn delete_service(&self, id: u32) -> RepositoryResult<bool>;

    async fn list_features(&self) -> RepositoryResult<Vec<Feature>>;
    async fn get_feature(&self, id: u32) -> RepositoryResult<Option<Feature>>;
    async fn create_feature(&self, input: NewFeature) -> RepositoryResult<Feature>;
    async fn update_feature(&self, id: u32, update: FeatureUpdate) -> RepositoryResult<Option<Feature>>;
    async fn delete_feature(&self, id: u32) -> RepositoryResult<bool>;

    async fn list_testimonials(&self) -> RepositoryResult<Vec<Testimonial>>;
    async fn get_testimonial(&self, id: u32) -> RepositoryResult<Option<Testimonial>>;
    async fn create_testimonial(&self, input: NewTestimonial) -> RepositoryResult<Testimonial>;
    async fn update_testimonial(&self, id: u32, update: TestimonialUpdate) -> RepositoryResult<Option<Testimonial>>;
    async fn delete_testimonial(&self, id: u32) -> RepositoryResult<bool>;

    async fn list_contact_requests(&self) -> RepositoryResult<Vec<ContactRequest>>;
    async fn get_contact_request(&self, id: u32) -> RepositoryResult<Option<ContactRequest>>;
    async fn create_contact_request(&self, input: NewContactRequest) -> RepositoryResult<ContactRequest>;
    async fn update_contact_request_status(&self, id: u32, status: ContactStatus) -> RepositoryResult<Option<ContactRequest>>;
    async fn delete_contact_request(&self, id: u32) -> RepositoryResult<bool>;

    async fn get_company_details(&self) -> RepositoryResult<Option<CompanyDetails>>;
    async fn update_company_details(&self, input: NewCompanyDetails) -> RepositoryResult<CompanyDetails>;
}

/// In-memory content store. Each collection keeps its own id counter behind
/// a write lock, so concurrent creates cannot hand out the same id.
pub struct MemoryContentRepository {
    services: RwLock<Collection<Service>>,
    features: RwLock<Collection<Feature>>,
    testimonials: RwLock<Collection<Testimonial>>,
    contact_requests: RwLock<Collection<ContactRequest>>,
    company_details: RwLock<Collection<CompanyDetails>>,
}

impl MemoryContentRepository {
    pub fn new() -> Self {
        MemoryContentRepository {
            services: RwLock::new(Collection::new()),
            features: RwLock::new(Collection::new()),
            testimonials: RwLock::new(Collection::new()),
            contact_requests: RwLock::new(Collection::new()),
            company_details: RwLock::new(Collection::new()),
        }
    }
}

impl Default for MemoryContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentRepository for MemoryContentRepository {
    async fn list_services(&self) -> RepositoryResult<Vec<Service>> {
        Ok(self.services.read().await.list())
    }

    async fn get_service(&self, id: u32) -> RepositoryResult<Option<Service>> {
        Ok(self.services.read().await.get(id))
    }

    #[tracing::instrument(skip(self, input), fields(title = %input.title))]
    async fn create_service(&self, input: NewService) -> RepositoryResult<Service> {
        let mut services = self.services.write().await;
        let id = services.allocate_id();
        let service = Service {
            id,
            title: input.title,
            description: input.description,
            icon: input.icon,
            features: input.features,
            created_at: chrono::Utc::now(),
        };
        services.insert(id, service.clone());
        info!(service_id = id, "Service created");
        Ok(service)
    }

    #[tracing::instrument(skip(self, update), fields(id = id))]
    async fn update_service(&self, id: u32, update: ServiceUpdate) -> RepositoryResult<Option<Service>> {
        let mut services = self.services.write().await;
        let Some(existing) = services.get_mut(id) else {
            return Ok(None);
        };
        if let Some(title) = update.title {
            existing.title = title;
        }
        if let Some(description) = update.description {
            existing.description = description;
        }
        if let Some(icon) = update.icon {
            existing.icon = icon;
        }
        if let Some(features) = update.features {
            existing.features = features;
        }
        info!(service_id = id, "Service updated");
        Ok(Some(existing.clone()))
    }

    #[tracing::instrument(skip(self), fields(id = id))]
    async fn delete_service(&self, id: u32) -> RepositoryResult<bool> {
        let removed = self.services.write().await.remove(id);
        if removed {
            info!(service_id = id, "Service deleted");
        }
        Ok(removed)
    }

    async fn list_features(&self) -> RepositoryResult<Vec<Feature>> {
        Ok(self.features.read().await.list())
    }

    async fn get_feature(&self, id: u32) -> RepositoryResult<Option<Feature>> {
        Ok(self.features.read().await.get(id))
    }

    #[tracing::instrument(skip(self, input), fields(title = %input.title))]
    async fn create_feature(&self, input: NewFeature) -> RepositoryResult<Feature> {
        let mut features = self.features.write().await;
        let id = features.allocate_id();
        let feature = Feature {
            id,
            title: input.title,
            description: input.description,
            icon: input.icon,
        };
        features.insert(id, feature.clone());
        info!(feature_id = id, "Feature created");
        Ok(feature)
    }

    #[tracing::instrument(skip(self, update), fields(id = id))]
    async fn update_feature(&self, id: u32, update: FeatureUpdate) -> RepositoryResult<Option<Feature>> {
        let mut features = self.features.write().await;
        let Some(existing) = features.get_mut(id) else {
            return Ok(None);
        };
        if let Some(title) = update.title {
            existing.title = title;
        }
        if let Some(description) = update.description {
            existing.description = description;
        }
        if let Some(icon) = update.icon {
            existing.icon = icon;
        }
        info!(feature_id = id, "Feature updated");
        Ok(Some(existing.clone()))
    }

    #[tracing::instrument(skip(self), fields(id = id))]
    async fn delete_feature(&self, id: u32) -> RepositoryResult<bool> {
        let removed = self.features.write().await.remove(id);
        if removed {
            info!(feature_id = id, "Feature deleted");
        }
        Ok(removed)
    }

    async fn list_testimonials(&self) -> RepositoryResult<Vec<Testimonial>> {
        Ok(self.testimonials.read().await.list())
    }

    async fn get_testimonial(&self, id: u32) -> RepositoryResult<Option<Testimonial>> {
        Ok(self.testimonials.read().await.get(id))
    }

    #[tracing::instrument(skip(self, input), fields(name = %input.name))]
    async fn create_testimonial(&self, input: NewTestimonial) -> RepositoryResult<Testimonial> {
        let mut testimonials = self.testimonials.write().await;
        let id = testimonials.allocate_id();
        let testimonial = Testimonial {
            id,
            name: input.name,
            position: input.position,
            company: input.company,
            content: input.content,
            rating: input.rating,
        };
        testimonials.insert(id, testimonial.clone());
        info!(testimonial_id = id, "Testimonial created");
        Ok(testimonial)
    }

    #[tracing::instrument(skip(self, update), fields(id = id))]
    async fn update_testimonial(&self, id: u32, update: TestimonialUpdate) -> RepositoryResult<Option<Testimonial>> {
        let mut testimonials = self.testimonials.write().await;
        let Some(existing) = testimonials.get_mut(id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            existing.name = name;
        }
        if let Some(position) = update.position {
            existing.position = position;
        }
        if let Some(company) = update.company {
            existing.company = company;
        }
        if let Some(content) = update.content {
            existing.content = content;
        }
        if let Some(rating) = update.rating {
            existing.rating = rating;
        }
        info!(testimonial_id = id, "Testimonial updated");
        Ok(Some(existing.clone()))
    }

    #[tracing::instrument(skip(self), fields(id = id))]
    async fn delete_testimonial(&self, id: u32) -> RepositoryResult<bool> {
        let removed = self.testimonials.write().await.remove(id);
        if removed {
            info!(testimonial_id = id, "Testimonial deleted");
        }
        Ok(removed)
    }

    async fn list_contact_requests(&self) -> RepositoryResult<Vec<ContactRequest>> {
        Ok(self.contact_requests.read().await.list())
    }

    async fn get_contact_request(&self, id: u32) -> RepositoryResult<Option<ContactRequest>> {
        Ok(self.contact_requests.read().await.get(id))
    }

    #[tracing::instrument(skip(self, input), fields(name = %input.name))]
    async fn create_contact_request(&self, input: NewContactRequest) -> RepositoryResult<ContactRequest> {
        let mut requests = self.contact_requests.write().await;
        let id = requests.allocate_id();
        let request = ContactRequest {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            service: input.service,
            message: input.message,
            status: ContactStatus::New,
            created_at: chrono::Utc::now(),
        };
        requests.insert(id, request.clone());
        info!(request_id = id, "Contact request created");
        Ok(request)
    }

    #[tracing::instrument(skip(self), fields(id = id, status = %status))]
    async fn update_contact_request_status(&self, id: u32, status: ContactStatus) -> RepositoryResult<Option<ContactRequest>> {
        let mut requests = self.contact_requests.write().await;
        let Some(existing) = requests.get_mut(id) else {
            return Ok(None);
        };
        existing.status = status;
        info!(request_id = id, status = %status, "Contact request status updated");
        Ok(Some(existing.clone()))
    }

    #[tracing::instrument(skip(self), fields(id = id))]
    async fn delete_contact_request(&self, id: u32) -> RepositoryResult<bool> {
        let removed = self.contact_requests.write().await.remove(id);
        if removed {
            info!(request_id = id, "Contact request deleted");
        }
        Ok(removed)
    }

    async fn get_company_details(&self) -> RepositoryResult<Option<CompanyDetails>> {
        Ok(self.company_details.read().await.first())
    }

    // Upsert-to-singleton: the first call creates the record, every later
    // call rewrites its fields under the same id.
    #[tracing::instrument(skip(self, input))]
    async fn update_company_details(&self, input: NewCompanyDetails) -> RepositoryResult<CompanyDetails> {
        let mut details = self.company_details.write().await;
        if let Some(existing) = details.first_mut() {
            existing.address = input.address;
            existing.email = input.email;
            existing.phone = input.phone;
            existing.social_links = input.social_links;
            let updated = existing.clone();
            info!(details_id = updated.id, "Company details updated");
            return Ok(updated);
        }
        let id = details.allocate_id();
        let created = CompanyDetails {
            id,
            address: input.address,
            email: input.email,
            phone: input.phone,
            social_links: input.social_links,
        };
        details.insert(id, created.clone());
        info!(details_id = id, "Company details created");
        Ok(created)
    }
}
