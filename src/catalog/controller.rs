use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
};
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::core::library::LibraryError;

fn parse_book_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>().map_err(|_| {
        tracing::warn!(book_id = raw, "invalid book id");
        ServerError::from(CommandError::from(LibraryError::validation("Invalid ID", Some(raw.to_string()))))
    })
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let svc = factory::create_catalog_service(&state);
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(parse_book_id(book_id.as_str())?);
    let svc = factory::create_catalog_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req = serde_json::from_slice::<Option<AddBookCommandRequest>>(&body)
        .map_err(|err| json_to_server_error("Invalid request payload", err))?
        .unwrap_or_else(|| AddBookCommandRequest::new(BookDto::default()));
    let svc = factory::create_catalog_service(&state);
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

// The body is decoded before the catalog is touched, so a bad payload never
// removes the existing record. A null body stands for the zero-valued book.
pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    body: Bytes) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let book_id = parse_book_id(book_id.as_str())?;
    let book = serde_json::from_slice::<Option<BookDto>>(&body)
        .map_err(|err| json_to_server_error("Invalid book data", err))?
        .unwrap_or_default();
    let svc = factory::create_catalog_service(&state);
    let res = UpdateBookCommand::new(svc).execute(UpdateBookCommandRequest::new(book_id, book)).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest::new(parse_book_id(book_id.as_str())?);
    let svc = factory::create_catalog_service(&state);
    let res = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::catalog::controller::parse_book_id;

    #[tokio::test]
    async fn test_should_parse_book_id() {
        assert_eq!(Ok(42), parse_book_id("42"));
        assert_eq!(Ok(-1), parse_book_id("-1"));
        assert_eq!(Err((StatusCode::BAD_REQUEST, "Invalid ID".to_string())), parse_book_id("abc"));
        assert!(parse_book_id("1.5").is_err());
        assert!(parse_book_id("").is_err());
    }
}
