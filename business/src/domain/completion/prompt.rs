use super::model::ChatMessage;

pub const SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant. Please respond to the user queries.";
pub const USER_TEMPLATE: &str = "Question: {question}";
pub const QUESTION_VARIABLE: &str = "{question}";

/// Fixed two-message prompt: a system instruction followed by a user slot
/// holding the `{question}` variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    system: &'static str,
    user: &'static str,
}

impl PromptTemplate {
    pub const fn assistant() -> Self {
        Self {
            system: SYSTEM_INSTRUCTION,
            user: USER_TEMPLATE,
        }
    }

    /// Renders the message sequence for one question.
    ///
    /// The variable is substituted once, so a question that itself contains
    /// `{question}` is embedded literally.
    pub fn render(&self, question: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system),
            ChatMessage::user(self.user.replacen(QUESTION_VARIABLE, question, 1)),
        ]
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::assistant()
    }
}
