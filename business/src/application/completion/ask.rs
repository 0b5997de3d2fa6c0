use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::Answer;
use crate::domain::completion::prompt::PromptTemplate;
use crate::domain::completion::services::CompletionService;
use crate::domain::completion::use_cases::ask::{AskQuestionParams, AskQuestionUseCase};
use crate::domain::logger::Logger;

pub struct AskQuestionUseCaseImpl {
    pub template: PromptTemplate,
    pub service: Arc<dyn CompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AskQuestionUseCase for AskQuestionUseCaseImpl {
    async fn execute(&self, params: AskQuestionParams) -> Result<Answer, CompletionError> {
        if params.question.is_empty() {
            self.logger.warn("Empty question received, no request sent");
            return Err(CompletionError::EmptyQuestion);
        }

        self.logger.info(&format!(
            "Answering question ({} chars)",
            params.question.chars().count()
        ));

        let messages = self.template.render(&params.question);

        match self.service.complete(&messages).await {
            Ok(text) => {
                self.logger
                    .info(&format!("Answer received ({} chars)", text.chars().count()));
                Ok(Answer::new(text))
            }
            Err(err) => {
                self.logger.error(&format!("Completion failed: {}", err));
                Err(err)
            }
        }
    }
}
