//! Rule-based scoring, profiling and recommendation heuristics.
//!
//! Everything below `engine` is pure: inputs in, records out, with randomness
//! passed in explicitly.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod entropy;
pub mod metrics;
pub mod predictor;
pub mod profile;
pub mod recommender;
pub mod stats;
pub mod types;
