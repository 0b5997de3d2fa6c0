use std::sync::Arc;

use poem::handler;
use poem::web::{Data, Html, Query};
use serde::Deserialize;

use business::domain::completion::use_cases::ask::{AskQuestionParams, AskQuestionUseCase};

use super::view::{self, Outcome};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub question: Option<String>,
}

/// Question page. A non-empty `question` triggers exactly one completion.
#[handler]
pub async fn index(
    Query(query): Query<PageQuery>,
    Data(ask_use_case): Data<&Arc<dyn AskQuestionUseCase>>,
) -> Html<String> {
    let question = query.question.unwrap_or_default();
    if question.is_empty() {
        return Html(view::render("", &Outcome::Idle));
    }

    let outcome = match ask_use_case
        .execute(AskQuestionParams {
            question: question.clone(),
        })
        .await
    {
        Ok(answer) => Outcome::Answer(answer.into_inner()),
        Err(err) => Outcome::Error(view::error_message(&err)),
    };

    Html(view::render(&question, &outcome))
}
