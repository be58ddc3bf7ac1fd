//! # Infrastructure Layer
//!
//! Ports and adapters for the engine's collaborators: listing storage and
//! the shared result cache.

pub mod cache;
pub mod persistence;
