// Swipe pipeline: request validation, match scoring, auto-apply decision.
// Upstream reads go through crate::upstream, writes through crate::collaborators.

pub mod cover_letter;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod scoring;
pub mod service;
