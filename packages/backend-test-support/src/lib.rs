//! Backend test support utilities
//!
//! Shared plumbing for the backend's unit and integration tests, currently
//! just unified logging initialization.

pub mod logging;
