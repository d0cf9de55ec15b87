// Recommendation Engine: one product per routine step, from an LLM reply when
// available, otherwise from local table-driven matching.
// All LLM calls go through llm_client; no direct Anthropic calls here.

pub mod engine;
pub mod handlers;
pub mod matcher;
pub mod narrative;
pub mod prompts;
pub mod response;
pub mod taxonomy;
