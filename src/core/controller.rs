use std::sync::Arc;
use axum::http::StatusCode;
use crate::books::factory;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) book_repository: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(branch: &str, store: RepositoryStore) -> AppState {
        AppState {
            config: Configuration::new(branch),
            book_repository: factory::create_book_repository(store),
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(message: &str, err: serde_json::Error) -> ServerError {
    tracing::warn!(error = %err, "{}", message);
    (StatusCode::BAD_REQUEST, message.to_string())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let message = err.message().to_string();
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, message)
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Serialization { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}
