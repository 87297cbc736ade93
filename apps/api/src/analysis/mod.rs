// CV analysis engine.
// Everything except `handlers` is pure and synchronous: deterministic over its
// inputs and the fixed tables in `taxonomy`. No I/O, no LLM calls.

pub mod formatting;
pub mod handlers;
pub mod metrics;
pub mod report;
pub mod scorer;
pub mod similarity;
pub mod skills;
pub mod taxonomy;
pub mod text;
