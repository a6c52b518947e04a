//! Answer generation: query routing, prompt assembly, response generation

mod classifier;
mod prompt;
mod responder;

pub use classifier::{classify, GeneralKind, QueryKind};
pub use prompt::{PromptBuilder, SYSTEM_INSTRUCTION};
pub use responder::Responder;
