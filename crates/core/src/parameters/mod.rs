//! Local parameter store
//!
//! Name-keyed store the engine pushes confirmed values into.

pub mod error;
pub mod storage;

pub use error::ParameterError;
pub use storage::{ParamFlags, ParamName, ParamStore, MAX_PARAMS, PARAM_NAME_LEN};
