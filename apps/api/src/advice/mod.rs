// Career advice: profile in, six rendered HTML fragments out.
// The markdown itself comes from an AdviceProvider (hosted agent or in-process
// LLM); the formatter module turns it into cards.

pub mod agent;
pub mod catalog;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod prompts;
pub mod provider;
pub mod resume;
