//! # TutorMatch Core
//!
//! Domain logic for the TutorMatch availability service. This crate owns the
//! weekly availability model: tutors and students publish recurring weekly
//! time slots (day of week plus start and end times), and the rest of the
//! platform consumes the validated collection.
//!
//! The crate is deliberately pure: no I/O, no async, no hidden state. Every
//! operation takes the caller-owned collection as input and reports the
//! outcome as a structured result, so the persistence and HTTP layers can be
//! swapped without touching the domain rules.

/// Error taxonomy shared by all layers
pub mod errors;
/// Value types, slot/profile models, and request/response DTOs
pub mod models;
/// The weekly schedule manager: validation, mutation, and grouping
pub mod schedule;
