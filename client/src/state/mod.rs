//! Component-local UI state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs wrapped in `RwSignal`s by the components that own them.
//! Nothing here is shared through context or outlives its component.

pub mod inquiry;
pub mod nav;
