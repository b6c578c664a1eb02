//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the inquiry pipeline so route handlers stay focused
//! on request validation and response shaping.

pub mod inquiry;
