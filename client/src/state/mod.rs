//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with methods for every transition, so it can be tested
//! without a reactive runtime. Components wrap it in `RwSignal`.

pub mod summarize;
