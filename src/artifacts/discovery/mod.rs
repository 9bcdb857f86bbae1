//! The streaming discovery pipeline
//!
//! ## Components
//!
//! - `record`: The dirty-repository record handed to consumers, and the
//!   list-entry capability it exposes to renderers
//! - `pipeline`: The producer/consumer coordination, with one run at a
//!   time, a backpressured handoff, a single terminal signal, and re-scan

pub mod pipeline;
pub mod record;
