//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chrome shared by every page. The header owns the
//! only piece of chrome state (the mobile menu flag).

pub mod footer;
pub mod header;
pub mod layout;
