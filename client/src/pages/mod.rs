//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and orchestration and delegates
//! reusable rendering to `components`.

pub mod home;
pub mod main;
pub mod profile;
