use serde::{Deserialize, Deserializer, Serialize};

// An explicit JSON null leaves the field at its zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where D: Deserializer<'de>, T: Default + Deserialize<'de> {
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// AuthorDto is the wire shape of a single author
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AuthorDto {
    #[serde(alias = "Firstname", alias = "FirstName", alias = "FIRSTNAME", deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(alias = "Lastname", alias = "LastName", alias = "LASTNAME", deserialize_with = "null_as_default")]
    pub lastname: String,
}

impl AuthorDto {
    pub fn new(firstname: &str, lastname: &str) -> AuthorDto {
        AuthorDto {
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
        }
    }
}

// BookDto is a data transfer object for Catalog service. Missing or null fields
// decode to their zero value, so the zero-valued book is also what `Default` gives.
// Keys match in lower, capitalised or upper case only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct BookDto {
    #[serde(alias = "Id", alias = "ID", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(alias = "Isbn", alias = "ISBN", deserialize_with = "null_as_default")]
    pub isbn: String,
    #[serde(alias = "Title", alias = "TITLE", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(alias = "Authors", alias = "AUTHORS", deserialize_with = "null_as_default")]
    pub authors: Vec<AuthorDto>,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, authors: Vec<AuthorDto>) -> BookDto {
        BookDto {
            id: 0,
            isbn: isbn.to_string(),
            title: title.to_string(),
            authors,
        }
    }
}
