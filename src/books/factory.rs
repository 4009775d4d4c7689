use std::sync::Arc;
use crate::books::domain::model::{AuthorEntity, BookEntity};
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::repository::RepositoryStore;

pub(crate) fn create_book_repository(store: RepositoryStore) -> Arc<dyn BookRepository> {
    match store {
        RepositoryStore::Memory => {
            Arc::new(MemoryBookRepository::default())
        }
        RepositoryStore::SeededMemory => {
            Arc::new(MemoryBookRepository::new(seed_books()))
        }
    }
}

// Books available when the process starts.
pub(crate) fn seed_books() -> Vec<BookEntity> {
    let first_authors = ["albert", "berina", "charles"].iter()
        .map(|name| AuthorEntity::new(format!("John {}", name).as_str(), format!("Doe {}", name).as_str()))
        .collect();
    vec![
        BookEntity::new(1, "12345", "Book 1", first_authors),
        BookEntity::new(2, "67890", "Book 2", vec![
            AuthorEntity::new("oak", "kasidit"),
            AuthorEntity::new("John", "Smith"),
            AuthorEntity::new("Jane", "Doe"),
            AuthorEntity::new("albert", "berina"),
        ]),
        BookEntity::new(3, "24680", "Book 3", vec![
            AuthorEntity::new("Jane", "Austen"),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use crate::books::factory::{create_book_repository, seed_books};
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_seed_unique_ids() {
        let books = seed_books();
        let ids: HashSet<i64> = books.iter().map(|b| b.id).collect();
        assert_eq!(3, ids.len());
        assert_eq!("John albert", books[0].authors[0].firstname.as_str());
        assert_eq!("Doe charles", books[0].authors[2].lastname.as_str());
    }

    #[tokio::test]
    async fn test_should_create_repository_for_store() {
        let empty = create_book_repository(RepositoryStore::Memory);
        assert_eq!(0, empty.count().await.expect("should count"));

        let seeded = create_book_repository(RepositoryStore::SeededMemory);
        let ids: Vec<i64> = seeded.list().await.expect("should list").iter().map(|b| b.id).collect();
        assert_eq!(vec![1, 2, 3], ids);
    }
}
