//! Reusable UI component modules.

pub mod image_upload;
