//! Small shared helpers with no page-specific state.

pub mod mime;
pub mod preview;
