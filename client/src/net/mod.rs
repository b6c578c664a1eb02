//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` posts contact form submissions to the server. The message layout
//! and delivery channel live server-side.

pub mod api;
