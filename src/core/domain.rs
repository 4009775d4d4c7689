// Identifiable defines common traits that can be shared by stored records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

pub const DEFAULT_PORT: u16 = 8080;

// Configuration abstracts config options for the bookstore
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub port: u16,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            port: DEFAULT_PORT,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
