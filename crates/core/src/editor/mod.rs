//! Parameter editor
//!
//! One editor per parameter slot. It owns the live value the operator is
//! stepping, the saved value (last commit point) and a reference to the
//! limit descriptor resolved for the active activity.
//!
//! # Invariants
//!
//! - After any step the live value lies in the resolved descriptor's domain
//! - The saved value changes only through [`ParamEditor::save`] or
//!   [`ParamEditor::seed`], never through stepping

mod display;
mod stepping;

pub use display::{
    DisplayError, DisplayText, Rendered, DISPLAY_LEN, NO_SUCH_TYPE_TEXT, OUT_OF_RANGE_TEXT,
};
pub use stepping::{step_discrete, step_interval, Direction};

use crate::limits::{LimitDescriptor, ParamInfo, SlotId};
use core::fmt::Write;

/// Editing state of one parameter slot
#[derive(Debug, Clone, Copy)]
pub struct ParamEditor {
    slot: SlotId,
    info: &'static ParamInfo,
    limit: &'static LimitDescriptor,
    value: f32,
    saved_value: f32,
}

impl ParamEditor {
    /// Create an editor bound to `limit`, starting from the descriptor's default
    pub fn new(slot: SlotId, info: &'static ParamInfo, limit: &'static LimitDescriptor) -> Self {
        let value = limit.default_value();
        Self {
            slot,
            info,
            limit,
            value,
            saved_value: value,
        }
    }

    /// Slot index of this editor
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    /// Parameter store key
    pub fn name(&self) -> &'static str {
        self.info.name
    }

    /// Menu label
    pub fn display_name(&self) -> &'static str {
        self.info.display_name
    }

    /// Slot metadata
    pub fn info(&self) -> &'static ParamInfo {
        self.info
    }

    /// Currently resolved limit descriptor
    pub fn limit(&self) -> &'static LimitDescriptor {
        self.limit
    }

    /// Check whether the slot is visible under the resolved descriptor
    pub fn is_visible(&self) -> bool {
        self.limit.is_visible()
    }

    /// Live (being edited) value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value at the last commit point
    pub fn saved_value(&self) -> f32 {
        self.saved_value
    }

    /// Rebind the editor to a newly resolved descriptor
    ///
    /// Values are left as they are; the next step brings them into the new
    /// domain.
    pub fn bind(&mut self, limit: &'static LimitDescriptor) {
        self.limit = limit;
    }

    /// Set both live and saved value from an authoritative source
    pub fn seed(&mut self, value: f32) {
        self.value = value;
        self.saved_value = value;
    }

    /// Move the live value one step in `direction`
    ///
    /// Invisible slots are left unchanged.
    pub fn step(&mut self, direction: Direction) {
        self.value = match *self.limit {
            LimitDescriptor::Invisible => self.value,
            LimitDescriptor::Interval { start, end, step } => {
                step_interval(self.value, start, end, step, direction)
            }
            LimitDescriptor::DiscreteInt(values)
            | LimitDescriptor::DiscreteFloat(values)
            | LimitDescriptor::DiscreteString(values) => {
                step_discrete(self.value, values, direction)
            }
        };
    }

    /// Step forward
    pub fn next(&mut self) {
        self.step(Direction::Forward);
    }

    /// Step backward
    pub fn prev(&mut self) {
        self.step(Direction::Backward);
    }

    /// Commit the live value
    pub fn save(&mut self) {
        self.saved_value = self.value;
    }

    /// Discard edits since the last commit
    pub fn cancel(&mut self) {
        self.value = self.saved_value;
    }

    /// Check whether the live value differs from the saved one
    pub fn is_modified(&self) -> bool {
        self.value != self.saved_value
    }

    /// Render the live value into `out`
    ///
    /// Integer for `DiscreteInt`, two decimals for `DiscreteFloat` and
    /// `Interval`, the display table entry for `DiscreteString`. A string
    /// value outside the table writes a placeholder and reports
    /// [`Rendered::OutOfRange`]. Invisible slots write a placeholder and fail
    /// with [`DisplayError::NoSuchType`].
    pub fn format_display<W: Write>(&self, out: &mut W) -> Result<Rendered, DisplayError> {
        match self.limit {
            LimitDescriptor::DiscreteInt(_) => display::write_int(out, self.value),
            LimitDescriptor::DiscreteFloat(_) | LimitDescriptor::Interval { .. } => {
                display::write_fixed(out, self.value)
            }
            LimitDescriptor::DiscreteString(_) => {
                display::write_label(out, self.value, self.info.display_values)
            }
            LimitDescriptor::Invisible => {
                out.write_str(NO_SUCH_TYPE_TEXT)?;
                Err(DisplayError::NoSuchType)
            }
        }
    }

    /// Render the live value into a fresh [`DisplayText`]
    pub fn display_text(&self) -> (DisplayText, Result<Rendered, DisplayError>) {
        let mut text = DisplayText::new();
        let result = self.format_display(&mut text);
        (text, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::TargetDevice;

    static INFO: ParamInfo = ParamInfo::new("ACT_LEVEL", "Level", TargetDevice::ALL)
        .with_display_values(&["Off", "Low", "High"]);

    static INTS: LimitDescriptor = LimitDescriptor::DiscreteInt(&[1.0, 2.0, 3.0]);
    static FLOATS: LimitDescriptor = LimitDescriptor::DiscreteFloat(&[0.5, 1.5]);
    static LABELS: LimitDescriptor = LimitDescriptor::DiscreteString(&[0.0, 1.0, 2.0, 3.0]);
    static RANGE: LimitDescriptor = LimitDescriptor::Interval {
        start: 0.0,
        end: 10.0,
        step: 2.0,
    };
    static HIDDEN: LimitDescriptor = LimitDescriptor::Invisible;

    #[test]
    fn test_new_starts_from_default() {
        let editor = ParamEditor::new(4, &INFO, &RANGE);
        assert_eq!(editor.slot(), 4);
        assert_eq!(editor.name(), "ACT_LEVEL");
        assert_eq!(editor.display_name(), "Level");
        assert_eq!(editor.value(), 0.0);
        assert_eq!(editor.saved_value(), 0.0);
        assert!(!editor.is_modified());
    }

    #[test]
    fn test_step_discrete() {
        let mut editor = ParamEditor::new(0, &INFO, &INTS);
        editor.next();
        assert_eq!(editor.value(), 2.0);
        editor.prev();
        editor.prev();
        assert_eq!(editor.value(), 3.0);
    }

    #[test]
    fn test_step_interval() {
        let mut editor = ParamEditor::new(0, &INFO, &RANGE);
        editor.seed(3.0);
        editor.next();
        assert_eq!(editor.value(), 4.0);
        editor.seed(0.0);
        editor.prev();
        assert_eq!(editor.value(), 10.0);
    }

    #[test]
    fn test_step_invisible_is_noop() {
        let mut editor = ParamEditor::new(0, &INFO, &HIDDEN);
        editor.seed(7.0);
        editor.next();
        assert_eq!(editor.value(), 7.0);
    }

    #[test]
    fn test_step_keeps_saved_value() {
        let mut editor = ParamEditor::new(0, &INFO, &INTS);
        editor.next();
        editor.next();
        assert_eq!(editor.saved_value(), 1.0);
        assert!(editor.is_modified());
    }

    #[test]
    fn test_save_and_cancel() {
        let mut editor = ParamEditor::new(0, &INFO, &INTS);
        editor.next();
        editor.save();
        assert_eq!(editor.saved_value(), 2.0);

        editor.next();
        editor.next();
        editor.cancel();
        assert_eq!(editor.value(), 2.0);
    }

    #[test]
    fn test_cancel_without_save_restores_initial() {
        let mut editor = ParamEditor::new(0, &INFO, &FLOATS);
        editor.next();
        editor.cancel();
        assert_eq!(editor.value(), 0.5);
    }

    #[test]
    fn test_bind_then_step_enters_new_domain() {
        let mut editor = ParamEditor::new(0, &INFO, &RANGE);
        editor.seed(4.0);
        editor.bind(&FLOATS);
        editor.next();
        assert_eq!(editor.value(), 0.5);
    }

    #[test]
    fn test_format_int_and_float() {
        let mut editor = ParamEditor::new(0, &INFO, &INTS);
        editor.next();
        let (text, result) = editor.display_text();
        assert_eq!(result, Ok(Rendered::Value));
        assert_eq!(text.as_str(), "2");

        let editor = ParamEditor::new(0, &INFO, &FLOATS);
        assert_eq!(editor.display_text().0.as_str(), "0.50");

        let mut editor = ParamEditor::new(0, &INFO, &RANGE);
        editor.seed(6.0);
        assert_eq!(editor.display_text().0.as_str(), "6.00");
    }

    #[test]
    fn test_format_string() {
        let mut editor = ParamEditor::new(0, &INFO, &LABELS);
        editor.next();
        assert_eq!(editor.display_text().0.as_str(), "Low");

        // Value 3 is allowed but has no label
        editor.seed(3.0);
        let (text, result) = editor.display_text();
        assert_eq!(result, Ok(Rendered::OutOfRange { index: 3, count: 3 }));
        assert_eq!(text.as_str(), OUT_OF_RANGE_TEXT);
    }

    #[test]
    fn test_format_invisible_fails() {
        let editor = ParamEditor::new(0, &INFO, &HIDDEN);
        let (text, result) = editor.display_text();
        assert_eq!(result, Err(DisplayError::NoSuchType));
        assert_eq!(text.as_str(), NO_SUCH_TYPE_TEXT);
    }
}
