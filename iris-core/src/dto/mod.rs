//! Data Transfer Objects sent to the hosted inference API

pub mod prediction;
pub mod task;
