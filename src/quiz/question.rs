use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    /// 1-based position in the generated batch
    pub id: usize,

    pub question: String,

    /// answer choices, nominally four
    pub options: Vec<String>,

    /// expected to match one of `options`, not checked
    pub answer: String,

    /// explanation of the answer, empty when the model gave none
    pub description: String,
}

/// Turns the loosely shaped array returned by the model into quiz records.
///
/// Ids are reassigned by position. Any id supplied by the model is ignored.
pub fn normalize_questions(items: &[Value]) -> Vec<QuizQuestion> {
    let questions: Vec<QuizQuestion> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let options = match item.get("options") {
                Some(Value::Array(options)) => options.iter().map(option_text).collect(),
                _ => {
                    log::warn!("question {} has no options array", index + 1);
                    Vec::new()
                }
            };

            QuizQuestion {
                id: index + 1,
                question: get_text(item, "question").unwrap_or_default(),
                options,
                answer: get_text(item, "answer").unwrap_or_default(),
                description: get_text(item, "description").unwrap_or_default(),
            }
        })
        .collect();

    log::debug!("normalized {} questions", questions.len());
    questions
}

fn get_text(value: &Value, attribute: &str) -> Option<String> {
    value.get(attribute).and_then(scalar_text)
}

// one entry per option, so positions line up with what the model sent
fn option_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
        scalar => scalar_text(scalar).unwrap_or_default(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
