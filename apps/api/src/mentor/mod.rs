// Guided problem solver: explain → hint → feedback → solution.
// Stateless: stage and hint progression are derived from the transcript the
// client sends with every request. All LLM calls go through llm_client.

pub mod handlers;
pub mod hints;
pub mod models;
pub mod prompts;
pub mod session;
pub mod transcript;
