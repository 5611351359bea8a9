//! Value stepping rules
//!
//! Pure functions moving a float-encoded value one step through a discrete
//! list or an interval.

use crate::limits::float_eq;

/// Step direction requested by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Next value
    Forward,
    /// Previous value
    Backward,
}

impl Direction {
    /// Signed index offset of the direction
    #[inline]
    pub const fn delta(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Move `value` to the adjacent entry of `values`, wrapping at both ends
///
/// A value that matches no entry resets to the first entry regardless of
/// direction. An empty list leaves the value unchanged.
pub fn step_discrete(value: f32, values: &[f32], direction: Direction) -> f32 {
    let count = values.len();
    if count == 0 {
        return value;
    }

    match values.iter().position(|candidate| float_eq(value, *candidate)) {
        Some(index) => {
            let next = (index as isize + direction.delta()).rem_euclid(count as isize);
            values[next as usize]
        }
        None => values[0],
    }
}

/// Move `value` one tick through `[start, end]`
///
/// Out-of-range values clamp to the nearest bound. Stepping forward from
/// `end` wraps to `start` and backward from `start` wraps to `end`.
/// Otherwise the value moves to the far edge of its tick bucket, never past
/// `end`. A non-positive step only clamps.
pub fn step_interval(value: f32, start: f32, end: f32, step: f32, direction: Direction) -> f32 {
    if value < start {
        return start;
    }
    if value > end {
        return end;
    }
    if direction == Direction::Forward && float_eq(value, end) {
        return start;
    }
    if direction == Direction::Backward && float_eq(value, start) {
        return end;
    }
    if step <= 0.0 {
        return value;
    }

    // Ticks are always derived from their index so repeated stepping does
    // not accumulate float error. The estimate is corrected by one tick when
    // rounding lands it in a neighboring bucket.
    let tick = |index: u32| start + index as f32 * step;
    let mut index = ((value - start) / step) as u32;

    match direction {
        Direction::Forward => {
            if tick(index) > value {
                index = index.saturating_sub(1);
            } else if tick(index.saturating_add(1)) <= value {
                index = index.saturating_add(1);
            }
            tick(index.saturating_add(1)).min(end)
        }
        Direction::Backward => {
            if tick(index) >= value {
                index = index.saturating_sub(1);
            } else if tick(index.saturating_add(1)) < value {
                index = index.saturating_add(1);
            }
            tick(index)
        }
    }
}
