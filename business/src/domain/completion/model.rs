use serde::Serialize;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Role of a message in a chat completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A role-tagged message sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Model and sampling parameters used for every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f64,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Text returned by the completion service, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer(String);

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_roles_in_lowercase() {
        let message = ChatMessage::system("Be brief.");

        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"role": "system", "content": "Be brief."})
        );
    }

    #[test]
    fn should_serialize_user_role() {
        let message = ChatMessage::user("Question: hi");

        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["role"], "user");
    }

    #[test]
    fn should_default_to_fixed_model_and_temperature() {
        let settings = CompletionSettings::default();

        assert_eq!(settings.model, "gpt-3.5-turbo");
        assert_eq!(settings.temperature, 0.7);
    }

    #[test]
    fn should_keep_answer_text_unmodified() {
        let text = "  Four.\n\n**bold** <tag> ";
        let answer = Answer::new(text);

        assert_eq!(answer.as_str(), text);
        assert_eq!(answer.into_inner(), text);
    }
}
