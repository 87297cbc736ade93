//! LLM-backed assistance around the deterministic analysis core:
//! job-domain detection and CV optimization.

pub mod classifier;
pub mod handlers;
pub mod optimizer;
pub mod prompts;
