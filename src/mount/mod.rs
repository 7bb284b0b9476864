//! Seeded mountings composed from style parameters.

pub mod composer;

pub use composer::{DEFAULT_IDENTIFIER, compose_mounting, compose_with_params, sanitize_identifier};
