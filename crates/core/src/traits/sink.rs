//! Local parameter store abstraction

use crate::parameters::ParameterError;

/// Keyed store receiving confirmed parameter values
///
/// The engine only writes; it never reads values back.
pub trait ParamSink {
    /// Set the parameter `name` to `value`
    fn set_param(&mut self, name: &str, value: f32) -> Result<(), ParameterError>;
}

impl<S: ParamSink + ?Sized> ParamSink for &mut S {
    fn set_param(&mut self, name: &str, value: f32) -> Result<(), ParameterError> {
        (**self).set_param(name, value)
    }
}
