// Practice recommendations: one LLM call, decoded defensively.
// Decode failures degrade to the raw answer; only generation failures are errors.

pub mod handlers;
pub mod interpreter;
pub mod prompts;
pub mod recommender;
