//! Networking modules for the backend API and the analysis pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds one function per endpoint, `pipeline` sequences the analysis
//! stages, and `types` defines the wire schema shared with the services.

pub mod api;
pub mod pipeline;
pub mod types;
