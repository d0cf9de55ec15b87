// Quiz Analyzer: fixed question table plus additive skin-type scoring.
// Pure and synchronous. No LLM calls here.

pub mod analyzer;
pub mod handlers;
pub mod questions;
