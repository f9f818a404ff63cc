//! Interactive collection of a [`crate::template::TemplateSpec`].

pub mod flow;
pub mod prompt;

pub use flow::TemplateWizard;
pub use prompt::{Accepted, Answer, LineIo, PromptIo, Question, parse_yes_no};
