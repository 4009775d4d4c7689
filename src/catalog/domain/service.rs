use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::Book;
use crate::books::domain::model::{AuthorEntity, BookEntity};
use crate::books::dto::{AuthorDto, BookDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

const EVENT_GROUP: &str = "books";

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Arc<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    // The catalog has already changed by the time an event is built, so a failed
    // event is logged and the caller still gets the stored book.
    async fn publish(&self, event: serde_json::Result<DomainEvent>) {
        if let Err(err) = self.try_publish(event).await {
            tracing::warn!(branch = self.branch_id.as_str(), error = %err, "failed to publish domain event");
        }
    }

    async fn try_publish(&self, event: serde_json::Result<DomainEvent>) -> LibraryResult<()> {
        self.events_publisher.publish(&event?).await
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await?;
        tracing::debug!(branch = self.branch_id.as_str(), count = books.len(), "listed books");
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<Option<BookDto>> {
        self.book_repository.get(id).await.map(|b| b.as_ref().map(BookDto::from))
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let saved = self.book_repository.create(&BookEntity::from(book)).await?;
        tracing::info!(branch = self.branch_id.as_str(), book_id = saved.id(), isbn = saved.isbn(), title = saved.title(), "added book");
        let res = BookDto::from(&saved);
        self.publish(DomainEvent::added(EVENT_GROUP, saved.id(), &res)).await;
        Ok(res)
    }

    async fn update_book(&self, id: i64, book: &BookDto) -> LibraryResult<BookDto> {
        let saved = self.book_repository.update(id, &BookEntity::from(book)).await?;
        tracing::info!(branch = self.branch_id.as_str(), book_id = saved.id(), isbn = saved.isbn(), title = saved.title(), "replaced book");
        let res = BookDto::from(&saved);
        self.publish(DomainEvent::updated(EVENT_GROUP, saved.id(), &res)).await;
        Ok(res)
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<BookDto> {
        let removed = self.book_repository.delete(id).await?;
        tracing::info!(branch = self.branch_id.as_str(), book_id = removed.id(), title = removed.title(), "removed book");
        let res = BookDto::from(&removed);
        self.publish(DomainEvent::deleted(EVENT_GROUP, removed.id(), &res)).await;
        Ok(res)
    }
}

impl From<&AuthorEntity> for AuthorDto {
    fn from(other: &AuthorEntity) -> Self {
        Self {
            firstname: other.firstname.to_string(),
            lastname: other.lastname.to_string(),
        }
    }
}

impl From<&AuthorDto> for AuthorEntity {
    fn from(other: &AuthorDto) -> Self {
        Self {
            firstname: other.firstname.to_string(),
            lastname: other.lastname.to_string(),
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            authors: other.authors.iter().map(AuthorDto::from).collect(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            id: other.id,
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            authors: other.authors.iter().map(AuthorEntity::from).collect(),
        }
    }
}
