//! Core infrastructure
//!
//! Target-independent support shared by the engine modules.

pub mod logging;
