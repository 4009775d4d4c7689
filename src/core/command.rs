use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::NotFound { message } => { message.as_str() }
            CommandError::Serialization { message } => { message.as_str() }
            CommandError::Validation { message, .. } => { message.as_str() }
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
    }

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::not_found("test")), CommandError::NotFound{ message: _ }));
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)), CommandError::Validation{ message: _, reason_code: _ }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")), CommandError::Serialization{ message: _ }));
        assert_eq!("test", CommandError::from(LibraryError::not_found("test")).message());
    }
}
