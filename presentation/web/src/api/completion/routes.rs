use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::completion::use_cases::ask::{AskQuestionParams, AskQuestionUseCase};

use crate::api::completion::dto::{AnswerResponse, AskQuestionRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CompletionApi {
    ask_use_case: Arc<dyn AskQuestionUseCase>,
}

impl CompletionApi {
    pub fn new(ask_use_case: Arc<dyn AskQuestionUseCase>) -> Self {
        Self { ask_use_case }
    }
}

/// Completion API
///
/// JSON counterpart of the question form.
#[OpenApi]
impl CompletionApi {
    /// Ask a question
    ///
    /// Sends the question to the completion service once and returns the
    /// text of the first choice. An empty question is rejected without
    /// contacting the service.
    #[oai(path = "/completions", method = "post", tag = "ApiTags::Completions")]
    async fn ask(&self, body: Json<AskQuestionRequest>) -> AskQuestionResponse {
        let question = body.0.question;
        if question.is_empty() {
            return AskQuestionResponse::BadRequest(Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: "completion.empty_question".to_string(),
            }));
        }

        match self
            .ask_use_case
            .execute(AskQuestionParams { question })
            .await
        {
            Ok(answer) => AskQuestionResponse::Ok(Json(answer.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AskQuestionResponse::BadRequest(json),
                    502 => AskQuestionResponse::BadGateway(json),
                    503 => AskQuestionResponse::ServiceUnavailable(json),
                    504 => AskQuestionResponse::GatewayTimeout(json),
                    _ => AskQuestionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AskQuestionResponse {
    #[oai(status = 200)]
    Ok(Json<AnswerResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}
