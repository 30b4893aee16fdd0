mod error;
mod extract;
mod fetch;
mod prompt;
mod question;
mod transport;

pub use error::QuizError;
pub use extract::extract_json_array;
pub use fetch::QuizRequester;
pub use prompt::{build_prompt, Language, Level, UnknownLevel, SYSTEM_PROMPT};
pub use question::{normalize_questions, QuizQuestion};
pub use transport::{ChatTransport, HttpReply, UreqTransport};
