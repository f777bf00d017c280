use super::{add_form, footer, header, log, task_list, Frame};
use crate::state::State;
use crate::store::TaskStore;
use ratatui::layout::{Constraint, Direction, Layout};

const LOG_HEIGHT: u16 = 8;

/// Render the whole screen according to session state and store contents.
///
pub fn all(frame: &mut Frame, state: &State, store: &TaskStore) {
    let mut constraints = vec![
        Constraint::Length(3), // Title and filters
        Constraint::Length(3), // Add form
        Constraint::Min(3),    // Task list
    ];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    header(frame, chunks[0], state, store);
    add_form(frame, chunks[1], state);
    task_list(frame, chunks[2], state, store);
    if state.is_log_visible() {
        log(frame, chunks[3], state);
        footer(frame, chunks[4], state);
    } else {
        footer(frame, chunks[3], state);
    }
}
