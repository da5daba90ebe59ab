//! `drilltrack-insights`
//!
//! **Responsibility:** boundary to the external text-generation service.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not mutate inventory state (callers pass a snapshot).
//! - Failures are absorbed at this boundary; callers always receive display
//!   text, never an error.

pub mod client;
pub mod prompt;
pub mod requester;

pub use client::{GeminiClient, InsightClient, InsightError};
pub use prompt::build_prompt;
pub use requester::{EMPTY_ANALYSIS_MESSAGE, InsightRequester, SERVICE_UNAVAILABLE_MESSAGE};
