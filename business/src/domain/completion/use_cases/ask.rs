use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::Answer;

#[derive(Debug, Clone)]
pub struct AskQuestionParams {
    pub question: String,
}

#[async_trait]
pub trait AskQuestionUseCase: Send + Sync {
    async fn execute(&self, params: AskQuestionParams) -> Result<Answer, CompletionError>;
}
