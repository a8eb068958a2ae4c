//! Gravity simulation
//!
//! The figure falls one row per step until any of its cells would leave
//! the bottom of the field or land on terrain. Fields are values: a
//! step returns a new [`Field`] and the simulation ends at the first
//! fixed point, detected by structural equality.

use crate::field::Field;

/// The outcome of [`settle`]: the resting field plus the recorded
/// states, one per simulation step (empty unless tracing was requested).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub field: Field,
    pub trace: Vec<Field>,
}

/// Move the figure one row down, if nothing blocks it.
///
/// The move is all-or-nothing: if any cell one row below is terrain or
/// past the bottom row, the field comes back unchanged. Dimensions and
/// terrain are always preserved.
pub fn step(field: &Field) -> Field {
    for p in field.figure() {
        let below = p.below();
        if !field.in_bounds(below) || field.terrain().contains(&below) {
            return field.clone();
        }
    }

    let figure = field.figure().iter().map(|p| p.below()).collect();
    field.with_figure(figure)
}

/// Apply [`step`] until the figure comes to rest.
///
/// Each iteration records the current state (when `record_trace` is
/// set) before attempting the step, so the trace holds every state the
/// figure occupies: the initial one, one per successful move, and the
/// final blocked state exactly once. Termination is bounded by the row
/// count, since every successful step moves the figure strictly lower.
pub fn settle(field: Field, record_trace: bool) -> Settled {
    let mut trace = Vec::new();
    let mut current = field;

    loop {
        if record_trace {
            trace.push(current.clone());
        }
        let next = step(&current);
        if next == current {
            break;
        }
        current = next;
    }

    Settled {
        field: current,
        trace,
    }
}
