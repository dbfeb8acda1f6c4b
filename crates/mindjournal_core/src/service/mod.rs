//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep collaborator layers (HTTP, sessions) decoupled from storage and
//!   analysis details.

pub mod entry_service;
pub mod insight_service;
