use axum::{routing::get, Router};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::app_conf::AppConfig;
use crate::config::{AdminUserConfig, SessionConfig};
use crate::middlewares::admin_middleware::AdminAuthState;
use crate::model::company_details::NewCompanyDetails;
use crate::model::feature::NewFeature;
use crate::model::service::NewService;
use crate::model::testimonial::NewTestimonial;
use crate::model::user::UserRole;
use crate::repository::content_repo::MemoryContentRepository;
use crate::repository::user_repo::{MemoryUserRepository, UserRepository};
use crate::service::auth_service::{AuthService, AuthServiceImpl};
use crate::service::content_service::{ContentService, ContentServiceImpl};
use crate::util::session::MemorySessionStore;

pub struct App {
    config: AppConfig,
    router: Router,
    pub content_service: Arc<ContentServiceImpl>,
    pub auth_service: Arc<AuthServiceImpl>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let session_config = SessionConfig::from_env().expect("Session config error");

        // Repositories and services are built here and handed down; nothing
        // below this point reaches for process-global state.
        let content_repo = Arc::new(MemoryContentRepository::new());
        let user_repo = Arc::new(MemoryUserRepository::new());
        let sessions = Arc::new(MemorySessionStore::new(session_config.clone()));

        let content_service = Arc::new(ContentServiceImpl::new(content_repo));
        let auth_service = Arc::new(AuthServiceImpl::new(user_repo, sessions));

        let admin_auth_state = Arc::new(AdminAuthState {
            auth_service: auth_service.clone(),
            session_config,
        });

        let mut app = App {
            config,
            router: Router::new(),
            content_service,
            auth_service,
        };
        app.router = app.create_router(admin_auth_state);
        app.create_first_admin_user().await;
        app.seed_default_content().await;
        app
    }

    fn create_router(&self, admin_auth_state: Arc<AdminAuthState>) -> Router {
        use crate::router::admin_router::admin_router;
        use crate::router::auth_router::auth_router;
        use crate::router::content_router::content_router;
        Router::new()
            .merge(content_router(self.content_service.clone()))
            .merge(auth_router(self.auth_service.clone()))
            .merge(admin_router(self.content_service.clone(), admin_auth_state))
            .route("/health", get(|| async { "OK" }))
    }

    pub async fn start(self) {
        let addr = self.config.socket_addr().expect("Invalid host");
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }

    async fn create_first_admin_user(&self) {
        let admin_conf = match AdminUserConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin user config not loaded, starting without an admin account: {e}");
                return;
            }
        };

        match self.auth_service.user_repo.find_by_username(&admin_conf.username).await {
            Ok(Some(_)) => {
                info!("Admin user already exists, skipping creation.");
                return;
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to check for existing admin user: {e}");
                return;
            }
        }

        match self
            .auth_service
            .register(admin_conf.username, admin_conf.password, UserRole::Admin)
            .await
        {
            Ok(_) => info!("First admin user created."),
            Err(e) => error!("Failed to create admin user: {e}"),
        }
    }

    // Default site content shown until an admin edits it.
    async fn seed_default_content(&self) {
        let services = [
            NewService {
                title: "Software Development".to_string(),
                description: "Custom software solutions designed to streamline your business processes, enhance productivity, and drive growth.".to_string(),
                icon: "code".to_string(),
                features: vec![
                    "Web Applications".to_string(),
                    "Mobile Applications".to_string(),
                    "Desktop Software".to_string(),
                ],
            },
            NewService {
                title: "IT Support & Consulting".to_string(),
                description: "Comprehensive technical support and expert consulting to keep your systems running smoothly and efficiently.".to_string(),
                icon: "server".to_string(),
                features: vec![
                    "24/7 Technical Support".to_string(),
                    "Infrastructure Management".to_string(),
                    "IT Strategy Consulting".to_string(),
                ],
            },
            NewService {
                title: "Data Management".to_string(),
                description: "Effective data solutions that help you organize, secure, and leverage your business information.".to_string(),
                icon: "database".to_string(),
                features: vec![
                    "Database Design & Optimization".to_string(),
                    "Data Migration & Integration".to_string(),
                    "Business Intelligence Solutions".to_string(),
                ],
            },
            NewService {
                title: "Cybersecurity".to_string(),
                description: "Protect your business with our comprehensive security solutions designed to safeguard your digital assets.".to_string(),
                icon: "shield".to_string(),
                features: vec![
                    "Security Assessments".to_string(),
                    "Threat Protection & Monitoring".to_string(),
                    "Compliance & Governance".to_string(),
                ],
            },
        ];
        for service in services {
            if let Err(e) = self.content_service.create_service(service).await {
                error!("Failed to seed service: {e}");
            }
        }

        let features = [
            NewFeature {
                title: "Expertise".to_string(),
                description: "Our team of experts brings years of experience in software development and IT solutions across various industries.".to_string(),
                icon: "code".to_string(),
            },
            NewFeature {
                title: "Client-Focused".to_string(),
                description: "We prioritize your needs, working closely with you to deliver solutions that address your specific challenges.".to_string(),
                icon: "users".to_string(),
            },
            NewFeature {
                title: "Results-Driven".to_string(),
                description: "Our solutions are designed to deliver measurable results, helping your business grow and succeed.".to_string(),
                icon: "bar-chart-2".to_string(),
            },
        ];
        for feature in features {
            if let Err(e) = self.content_service.create_feature(feature).await {
                error!("Failed to seed feature: {e}");
            }
        }

        let testimonial = NewTestimonial {
            name: "Sarah Johnson".to_string(),
            position: "CEO".to_string(),
            company: "TechInnovate".to_string(),
            content: "ExWork transformed our business operations with their custom software solution. The team was professional, responsive, and delivered exactly what we needed. I highly recommend their services.".to_string(),
            rating: 5,
        };
        if let Err(e) = self.content_service.create_testimonial(testimonial).await {
            error!("Failed to seed testimonial: {e}");
        }

        let details = NewCompanyDetails {
            address: "123 Business Avenue, Tech District, 10000, City, Country".to_string(),
            email: "contact@exwork.eu".to_string(),
            phone: "+1 (123) 456-7890".to_string(),
            social_links: vec![
                "https://linkedin.com".to_string(),
                "https://twitter.com".to_string(),
                "https://facebook.com".to_string(),
                "https://instagram.com".to_string(),
            ],
        };
        if let Err(e) = self.content_service.update_company_details(details).await {
            error!("Failed to seed company details: {e}");
        }

        info!("Default site content seeded");
    }
}
