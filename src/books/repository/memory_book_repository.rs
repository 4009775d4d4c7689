use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

/// Ordered, process-local book collection.
///
/// Every operation takes the one lock for its whole duration, so concurrent
/// requests observe each other as if they ran one after another. Lookups are
/// linear scans. Create appends unsorted; `list` sorts the stored vector in place.
#[derive(Debug, Default)]
pub(crate) struct MemoryBookRepository {
    books: Mutex<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }
}

// Highest id present plus one, so ids freed by a delete are never handed out again
// while a larger id is still alive.
fn next_id(books: &[BookEntity]) -> i64 {
    books.iter().map(|b| b.id).max().unwrap_or(0) + 1
}

fn position(books: &[BookEntity], id: i64) -> Option<usize> {
    books.iter().position(|b| b.id == id)
}

fn not_found(id: i64) -> LibraryError {
    LibraryError::not_found(format!("Book not found: {}", id).as_str())
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut books = self.books.lock().await;
        let book = entity.with_id(next_id(&books));
        books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, id: i64, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut books = self.books.lock().await;
        let ndx = position(&books, id).ok_or_else(|| not_found(id))?;
        books.remove(ndx);
        let book = entity.with_id(id);
        books.push(book.clone());
        books.sort_by_key(|b| b.id);
        Ok(book)
    }

    async fn get(&self, id: i64) -> LibraryResult<Option<BookEntity>> {
        let books = self.books.lock().await;
        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    async fn delete(&self, id: i64) -> LibraryResult<BookEntity> {
        let mut books = self.books.lock().await;
        let ndx = position(&books, id).ok_or_else(|| not_found(id))?;
        Ok(books.remove(ndx))
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        let mut books = self.books.lock().await;
        books.sort_by_key(|b| b.id);
        Ok(books.clone())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn count(&self) -> LibraryResult<usize> {
        Ok(self.books.lock().await.len())
    }
}
