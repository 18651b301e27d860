//! Iris Core
//!
//! Core types for the Iris image-understanding client.
//!
//! This crate contains:
//! - Domain types: predictions, their status and outcome, subject kinds
//! - DTOs: request bodies sent to the hosted inference API

pub mod domain;
pub mod dto;
