use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: i64,
}

impl GetBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    // An unknown id answers with the zero-valued book rather than an error.
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let found = self.catalog_service.find_book_by_id(req.book_id).await.map_err(CommandError::from)?;
        if found.is_none() {
            tracing::debug!(book_id = req.book_id, "book not found, answering empty book");
        }
        Ok(GetBookCommandResponse::new(found.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::controller::AppState;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let state = AppState::new("test", RepositoryStore::SeededMemory);
        let add_cmd = AddBookCommand::new(factory::create_catalog_service(&state));
        let get_cmd = GetBookCommand::new(factory::create_catalog_service(&state));

        let book = BookDto::new("isbn", "test book", vec![]);
        let res = add_cmd.execute(AddBookCommandRequest::new(book.clone())).await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book.id)).await.expect("should get book");
        assert_eq!(book.isbn, loaded.book.isbn);
        assert_eq!(book.title, loaded.book.title);
    }

    #[tokio::test]
    async fn test_should_answer_empty_book_when_missing() {
        let state = AppState::new("test", RepositoryStore::SeededMemory);
        let get_cmd = GetBookCommand::new(factory::create_catalog_service(&state));
        let loaded = get_cmd.execute(GetBookCommandRequest::new(404)).await.expect("should not fail");
        assert_eq!(BookDto::default(), loaded.book);
    }
}
