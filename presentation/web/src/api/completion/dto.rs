use poem_openapi::Object;

use business::domain::completion::model::Answer;

#[derive(Debug, Clone, Object)]
pub struct AskQuestionRequest {
    /// Free-text question. Must not be empty.
    pub question: String,
}

#[derive(Debug, Clone, Object)]
pub struct AnswerResponse {
    /// Text of the first completion choice, unmodified
    pub response: String,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            response: answer.into_inner(),
        }
    }
}
