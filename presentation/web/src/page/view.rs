use business::domain::completion::errors::CompletionError;

pub const PAGE_TITLE: &str = "LangChain Demo with OpenAI API";
pub const INPUT_LABEL: &str = "Ask a question or search a topic:";

/// What the page shows below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Idle,
    Answer(String),
    Error(String),
}

/// User-facing text for a failed completion.
pub fn error_message(err: &CompletionError) -> String {
    match err {
        CompletionError::EmptyQuestion => "Please enter a question.".to_string(),
        CompletionError::Transport(detail) => {
            format!("Could not reach the completion service: {}", detail)
        }
        CompletionError::Timeout => {
            "The completion service did not respond in time. Please try again.".to_string()
        }
        CompletionError::Service { status, message } => {
            format!("The completion service returned an error ({}): {}", status, message)
        }
        CompletionError::MalformedResponse => {
            "The completion service returned a response without any text.".to_string()
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render(question: &str, outcome: &Outcome) -> String {
    let result = match outcome {
        Outcome::Idle => String::new(),
        Outcome::Answer(text) => format!(
            r#"<section class="response"><p>Response:</p><div class="answer">{}</div></section>"#,
            escape_html(text)
        ),
        Outcome::Error(message) => format!(
            r#"<div class="error" role="alert">{}</div>"#,
            escape_html(message)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 46rem; margin: 3rem auto; padding: 0 1rem; }}
input[type=text] {{ width: 100%; padding: .5rem; font-size: 1rem; box-sizing: border-box; }}
.answer {{ white-space: pre-wrap; }}
.error {{ background: #fdecea; color: #8a1c1c; padding: .75rem; border-radius: .25rem; }}
#spinner {{ display: none; color: #555; }}
form.busy #spinner {{ display: block; }}
</style>
</head>
<body>
<h1>{title}</h1>
<form method="get" action="/" onsubmit="this.classList.add('busy')">
<label for="question">{label}</label>
<input type="text" id="question" name="question" value="{question}" autofocus>
<p id="spinner">Thinking...</p>
</form>
{result}
</body>
</html>
"#,
        title = PAGE_TITLE,
        label = INPUT_LABEL,
        question = escape_html(question),
        result = result,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_escape_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn should_render_form_without_result_when_idle() {
        let html = render("", &Outcome::Idle);

        assert!(html.contains("<title>LangChain Demo with OpenAI API</title>"));
        assert!(html.contains("Ask a question or search a topic:"));
        assert!(html.contains("Thinking..."));
        assert!(!html.contains("Response:"));
    }

    #[test]
    fn should_render_answer_below_form() {
        let html = render("What is 2+2?", &Outcome::Answer("4".to_string()));

        assert!(html.contains(r#"value="What is 2+2?""#));
        assert!(html.contains(r#"<p>Response:</p><div class="answer">4</div>"#));
    }

    #[test]
    fn should_render_error_message() {
        let message = error_message(&CompletionError::Timeout);

        let html = render("slow", &Outcome::Error(message));

        assert!(html.contains(r#"<div class="error" role="alert">"#));
        assert!(html.contains("did not respond in time"));
    }

    #[test]
    fn should_describe_service_errors_with_status() {
        let message = error_message(&CompletionError::service(429, "Rate limit reached"));

        assert_eq!(
            message,
            "The completion service returned an error (429): Rate limit reached"
        );
    }
}
