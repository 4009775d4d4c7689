use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UpdateBookCommandRequest {
    pub book_id: i64,
    pub book: BookDto,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64, book: BookDto) -> Self {
        Self {
            book_id,
            book,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id, &req.book).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::{AuthorDto, BookDto};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let state = AppState::new("test", RepositoryStore::SeededMemory);
        let update_cmd = UpdateBookCommand::new(factory::create_catalog_service(&state));
        let get_cmd = GetBookCommand::new(factory::create_catalog_service(&state));

        let book = BookDto::new("X", "Y", vec![AuthorDto::new("Ann", "Lee")]);
        let res = update_cmd.execute(UpdateBookCommandRequest::new(3, book.clone())).await.expect("should update book");
        assert_eq!(3, res.book.id);

        let loaded = get_cmd.execute(GetBookCommandRequest::new(3)).await.expect("should get book");
        assert_eq!(book.authors, loaded.book.authors);
        assert_eq!("Y", loaded.book.title.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_update_of_missing_book() {
        let state = AppState::new("test", RepositoryStore::Memory);
        let update_cmd = UpdateBookCommand::new(factory::create_catalog_service(&state));
        let res = update_cmd.execute(UpdateBookCommandRequest::new(1, BookDto::default())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
