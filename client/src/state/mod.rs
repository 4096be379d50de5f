//! Per-page state models.
//!
//! DESIGN
//! ======
//! State types are plain values held behind `RwSignal`s created by the page
//! that owns them. No state crosses a page boundary, which keeps every page
//! an isolated failure domain.

pub mod analysis;
pub mod upload;
