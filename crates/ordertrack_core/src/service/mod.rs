//! Caller-facing use-case services.
//!
//! # Responsibility
//! - Route untrusted input through normalization before persistence.
//! - Keep transport layers decoupled from storage details.

pub mod job_service;
