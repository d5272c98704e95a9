//! Networking modules for the completion round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call to the gateway and `types` defines the
//! shared wire schema.

pub mod api;
pub mod types;
