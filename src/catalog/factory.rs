use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::controller::AppState;
use crate::gateway::logs::publisher::LogPublisher;

pub(crate) fn create_catalog_service(state: &AppState) -> Box<dyn CatalogService> {
    let publisher = Box::new(LogPublisher::new());
    Box::new(CatalogServiceImpl::new(&state.config, state.book_repository.clone(), publisher))
}
