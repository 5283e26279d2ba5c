//! Use-case services.
//!
//! Validate caller input, assign ids and orchestrate repository calls so
//! outer layers (CLI, request handlers) stay storage-agnostic.

pub mod roster_service;
