//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page renders inside the shared `Layout` chrome. Only the contact
//! page holds state; the others render fixed content from `content`.

pub mod contact;
pub mod home;
pub mod profile;
pub mod services;
