use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// AuthorEntity is owned by exactly one book and has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AuthorEntity {
    pub firstname: String,
    pub lastname: String,
}

impl AuthorEntity {
    pub fn new(firstname: &str, lastname: &str) -> Self {
        Self {
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
        }
    }
}

// BookEntity is the record held by the catalog; id is assigned on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub id: i64,
    pub isbn: String,
    pub title: String,
    pub authors: Vec<AuthorEntity>,
}

impl BookEntity {
    pub fn new(id: i64, isbn: &str, title: &str, authors: Vec<AuthorEntity>) -> Self {
        Self {
            id,
            isbn: isbn.to_string(),
            title: title.to_string(),
            authors,
        }
    }

    pub fn with_id(&self, id: i64) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookEntity {
    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    fn title(&self) -> &str {
        self.title.as_str()
    }
}
