//! Discovery data structures and algorithms
//!
//! This module contains the core scanning machinery:
//!
//! - `walk`: Directory traversal with exclusion/pruning and repository
//!   root detection
//! - `status`: Porcelain-v2 status collection and parsing
//! - `discovery`: The streaming producer/consumer pipeline and the record
//!   type handed to consumers

pub mod discovery;
pub mod status;
pub mod walk;
