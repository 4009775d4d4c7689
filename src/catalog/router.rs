use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use crate::catalog::controller::{add_book, find_book_by_id, list_books, remove_book, update_book};
use crate::core::controller::AppState;

pub(crate) fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books))
        .route("/book", post(add_book))
        .route("/book/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
