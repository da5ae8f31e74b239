use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    auth::AuthRepositoryImpl, enrollment::EnrollmentRepositoryImpl,
    health::HealthCheckRepositoryImpl, hotel::HotelRepositoryImpl, ticket::TicketRepositoryImpl,
};
use kernel::repository::{auth::AuthRepository, health::HealthCheckRepository};
use kernel::service::hotel::{HotelService, HotelServiceImpl};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    hotel_service: Arc<dyn HotelService>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(pool.clone()));
        let hotel_service = Arc::new(HotelServiceImpl::new(
            Arc::new(HotelRepositoryImpl::new(pool.clone())),
            Arc::new(EnrollmentRepositoryImpl::new(pool.clone())),
            Arc::new(TicketRepositoryImpl::new(pool.clone())),
        ));
        Self {
            health_check_repository,
            auth_repository,
            hotel_service,
        }
    }

    /// Builds a registry from already constructed components, e.g. test doubles.
    pub fn with_components(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        hotel_service: Arc<dyn HotelService>,
    ) -> Self {
        Self {
            health_check_repository,
            auth_repository,
            hotel_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn hotel_service(&self) -> Arc<dyn HotelService> {
        self.hotel_service.clone()
    }
}
