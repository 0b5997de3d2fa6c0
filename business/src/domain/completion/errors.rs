/// Failures of a single completion request.
/// Messages start with a code-style identifier for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error("completion.empty_question")]
    EmptyQuestion,
    #[error("completion.transport: {0}")]
    Transport(String),
    #[error("completion.timeout")]
    Timeout,
    #[error("completion.service_error: {status} {message}")]
    Service { status: u16, message: String },
    #[error("completion.malformed_response")]
    MalformedResponse,
}

impl CompletionError {
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        CompletionError::Service {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        CompletionError::Transport(message.into())
    }
}
