//! # avp-core
//!
//! Core types and errors for the A&V TechSolutions portal client.
//!
//! This crate provides the foundational types shared across all portal crates:
//! - Entity structs mirroring the server's wire format (users, projects,
//!   payments, the locally stored session)
//! - Closed status enums with state machine transitions
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
