//! Limit descriptor types
//!
//! A limit descriptor is the per-activity rule that governs which values a
//! parameter slot may take and how the operator steps through them.

/// Index of a parameter slot in the fixed slot table
pub type SlotId = usize;

/// Editing mode of a limit descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    /// Hidden from navigation
    Invisible,
    /// Discrete integer values
    DiscreteInt,
    /// Discrete float values
    DiscreteFloat,
    /// Discrete values rendered through the slot's display table
    DiscreteString,
    /// Continuous interval with a fixed step
    Interval,
}

impl LimitKind {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitKind::Invisible => "Invisible",
            LimitKind::DiscreteInt => "DiscreteInt",
            LimitKind::DiscreteFloat => "DiscreteFloat",
            LimitKind::DiscreteString => "DiscreteString",
            LimitKind::Interval => "Interval",
        }
    }
}

/// Allowed values of a slot under one activity
///
/// Descriptors live in `'static` tables and are never cloned by the engine;
/// editors hold references into the catalog.
#[derive(Debug, PartialEq)]
pub enum LimitDescriptor {
    /// Slot is hidden for the activity
    Invisible,
    /// Ordered integer values (stored as float)
    DiscreteInt(&'static [f32]),
    /// Ordered float values
    DiscreteFloat(&'static [f32]),
    /// Ordered indices into the slot's display string table
    DiscreteString(&'static [f32]),
    /// Range `[start, end]` stepped by `step`
    Interval {
        /// Lower bound (inclusive)
        start: f32,
        /// Upper bound (inclusive)
        end: f32,
        /// Distance between ticks, must be positive
        step: f32,
    },
}

impl LimitDescriptor {
    /// Editing mode of this descriptor
    pub fn kind(&self) -> LimitKind {
        match self {
            LimitDescriptor::Invisible => LimitKind::Invisible,
            LimitDescriptor::DiscreteInt(_) => LimitKind::DiscreteInt,
            LimitDescriptor::DiscreteFloat(_) => LimitKind::DiscreteFloat,
            LimitDescriptor::DiscreteString(_) => LimitKind::DiscreteString,
            LimitDescriptor::Interval { .. } => LimitKind::Interval,
        }
    }

    /// Check whether the slot takes part in navigation
    pub fn is_visible(&self) -> bool {
        !matches!(self, LimitDescriptor::Invisible)
    }

    /// Allowed values for discrete modes, `None` otherwise
    pub fn values(&self) -> Option<&'static [f32]> {
        match *self {
            LimitDescriptor::DiscreteInt(values)
            | LimitDescriptor::DiscreteFloat(values)
            | LimitDescriptor::DiscreteString(values) => Some(values),
            _ => None,
        }
    }

    /// Value an editor starts from before any authoritative update
    ///
    /// First allowed entry for discrete modes, interval start, or zero.
    pub fn default_value(&self) -> f32 {
        match self {
            LimitDescriptor::Interval { start, .. } => *start,
            other => other
                .values()
                .and_then(|values| values.first().copied())
                .unwrap_or(0.0),
        }
    }

    /// Check whether `value` lies in the descriptor's domain
    pub fn contains(&self, value: f32) -> bool {
        match self {
            LimitDescriptor::Invisible => true,
            LimitDescriptor::Interval { start, end, .. } => value >= *start && value <= *end,
            other => other
                .values()
                .map(|values| values.iter().any(|v| float_eq(value, *v)))
                .unwrap_or(false),
        }
    }
}

/// Tolerance used when matching float-encoded values
pub const VALUE_EPSILON: f32 = 1e-6;

/// Equality within [`VALUE_EPSILON`]
#[inline]
pub fn float_eq(a: f32, b: f32) -> bool {
    a + VALUE_EPSILON > b && a - VALUE_EPSILON < b
}
