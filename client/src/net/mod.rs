//! Networking modules for the summarization API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls behind the `Summarizer` seam, and `types`
//! defines the wire schema.

pub mod api;
pub mod types;
