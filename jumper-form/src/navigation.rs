//! Focus movement between fields.
//!
//! The navigator is a pure function of the form state, the layout and the
//! focused index; it decides what a key means and never draws anything.

use jumper_form_types::Key;

use crate::{FormState, Layout};

/// What a key press asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move focus to this index.
    Focus(usize),
    /// Finish the form with the focused selection.
    Confirm,
    /// Abandon the form.
    Cancel,
    /// Hand the key to the edit engine.
    Edit,
    /// Nothing to do.
    Ignore,
}

/// Apply the gate-skip rule to a prospective focus target.
///
/// A closed gate pushes the target one index further. The push does not
/// repeat: if that index is past the end, the move is rejected.
pub fn resolve_target(state: &FormState, target: usize) -> Option<usize> {
    let gate_closed = state.field(target).is_some_and(|f| f.is_gate())
        && !state.all_required_satisfied();
    let target = if gate_closed { target + 1 } else { target };
    (target < state.len()).then_some(target)
}

/// Decide what `key` does when `focus` is the focused index.
pub fn dispatch(
    state: &FormState,
    layout: &Layout,
    focus: usize,
    key: Key,
    cancellable: bool,
) -> Command {
    let on_selection = state.field(focus).is_some_and(|f| f.kind().is_selection());
    let step = |target: usize| {
        resolve_target(state, target).map_or(Command::Ignore, Command::Focus)
    };

    match key {
        Key::Enter if on_selection => Command::Confirm,
        Key::Escape if cancellable => Command::Cancel,
        Key::Tab => resolve_target(state, focus + 1)
            .or_else(|| resolve_target(state, 0))
            .map_or(Command::Ignore, Command::Focus),
        Key::Enter => step(focus + 1),
        Key::Down if !layout.same_row(focus, focus + 1) => step(focus + 1),
        Key::Up if on_selection => state
            .last_input_index()
            .map_or(Command::Ignore, step),
        Key::Up => focus.checked_sub(1).map_or(Command::Ignore, step),
        Key::Right if on_selection && layout.same_row(focus, focus + 1) => step(focus + 1),
        Key::Left if on_selection && focus > 0 && layout.same_row(focus - 1, focus) => {
            step(focus - 1)
        }
        Key::Backspace | Key::Char(_) if !on_selection => Command::Edit,
        _ => Command::Ignore,
    }
}
