//! Core domain types for Hummet
//!
//! This crate holds the interview topic and user profile models, the static
//! fallback catalog, and the pure helpers (filtering, validation, text
//! normalization) shared by the client and the API server. It performs no I/O.

pub mod catalog;
pub mod filter;
pub mod models;
pub mod normalization;
pub mod provenance;
pub mod validation;

pub use catalog::TopicCatalog;
pub use filter::{TopicFilter, TopicSort};
pub use models::{OnboardingData, ProfileDetails, Topic, TopicDetail, UserProfile};
pub use provenance::{Provenance, Sourced};
