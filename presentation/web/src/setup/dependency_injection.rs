use std::sync::Arc;

use logger::TracingLogger;

use openai::chat_completion::ChatCompletionOpenAI;
use openai::client::OpenAIClient;

use business::application::completion::ask::AskQuestionUseCaseImpl;
use business::domain::completion::model::CompletionSettings;
use business::domain::completion::prompt::PromptTemplate;
use business::domain::completion::use_cases::ask::AskQuestionUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub completion_api: crate::api::completion::routes::CompletionApi,
    pub ask_use_case: Arc<dyn AskQuestionUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Credentials are passed explicitly, never through the process environment
        let openai_client = OpenAIClient::with_options(
            config.credentials.service_key().to_string(),
            config.openai.base_url.clone(),
            config.openai.timeout,
        );
        let completion_service = Arc::new(ChatCompletionOpenAI::new(
            openai_client,
            CompletionSettings::default(),
            config.credentials.tracing(),
        ));

        let ask_use_case: Arc<dyn AskQuestionUseCase> = Arc::new(AskQuestionUseCaseImpl {
            template: PromptTemplate::assistant(),
            service: completion_service,
            logger,
        });

        let completion_api =
            crate::api::completion::routes::CompletionApi::new(ask_use_case.clone());

        Self {
            health_api,
            completion_api,
            ask_use_case,
        }
    }
}
