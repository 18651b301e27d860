//! Core domain types
//!
//! These types describe remote predictions as the hosted inference API
//! reports them, and the outcome the client hands back to callers.

pub mod prediction;
pub mod subject;
