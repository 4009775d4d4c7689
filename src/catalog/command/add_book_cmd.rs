use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// The request body is the book itself; any id it carries is replaced on save.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) book: BookDto,
}

impl AddBookCommandRequest {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::controller::AppState;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let state = AppState::new("test", RepositoryStore::SeededMemory);
        let cmd = AddBookCommand::new(factory::create_catalog_service(&state));

        let req: AddBookCommandRequest = serde_json::from_str(r#"{"id":1,"isbn":"999","title":"New"}"#)
            .expect("should decode request");
        let res = cmd.execute(req).await.expect("should add book");
        assert_eq!(4, res.book.id);
        assert_eq!("New", res.book.title.as_str());
    }
}
