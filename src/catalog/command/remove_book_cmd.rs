use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: i64,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}


// Echoes the removed book back as confirmation.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct RemoveBookCommandResponse {
    pub book: BookDto,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let state = AppState::new("test", RepositoryStore::SeededMemory);
        let remove_cmd = RemoveBookCommand::new(factory::create_catalog_service(&state));

        let res = remove_cmd.execute(RemoveBookCommandRequest::new(2)).await.expect("should remove book");
        assert_eq!(2, res.book.id);
        assert_eq!("67890", res.book.isbn.as_str());

        let again = remove_cmd.execute(RemoveBookCommandRequest::new(2)).await;
        assert!(matches!(again, Err(CommandError::NotFound { .. })));
    }
}
