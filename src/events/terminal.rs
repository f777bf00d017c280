use crate::config::hotkeys::{get_action_for_event, HotkeyAction};
use crate::error::AppError;
use crate::state::{Mode, State};
use crate::store::{Action, TaskStore};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 250;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => (),
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State, store: &mut TaskStore) -> Result<bool> {
        match self.rx.recv().map_err(|e| AppError::Terminal(e.to_string()))? {
            Event::Input(key) => Ok(handle_key(key, state, store)),
            Event::Tick => Ok(true),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to the session and the store. Returns false if exit was
/// requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State, store: &mut TaskStore) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    let mode = state.mode();
    let action = get_action_for_event(&key, mode, state.hotkeys());
    match mode {
        Mode::TaskList => match action {
            Some(action) => return handle_task_list_action(action, state, store),
            None => trace!("Unbound key '{:?}' in task list.", key.code),
        },
        Mode::AddForm | Mode::EditTask => match action {
            Some(action) => handle_form_action(action, mode, state, store),
            None => handle_form_input(key, state),
        },
    }
    true
}

fn handle_task_list_action(action: HotkeyAction, state: &mut State, store: &mut TaskStore) -> bool {
    debug!("Processing task list action {:?}...", action);
    match action {
        HotkeyAction::NavigateNext => state.select_next(store),
        HotkeyAction::NavigatePrev => state.select_previous(store),
        HotkeyAction::ToggleComplete => {
            let toggle = state.toggle_selected(store);
            dispatch(toggle, state, store);
        }
        HotkeyAction::DeleteTask => {
            let delete = state.delete_selected(store);
            dispatch(delete, state, store);
        }
        HotkeyAction::EditTask => state.edit_selected(store),
        HotkeyAction::FocusAddForm => state.focus_add_form(),
        HotkeyAction::NextFilter => {
            let filter = state.next_filter(store);
            dispatch(Some(filter), state, store);
        }
        HotkeyAction::PrevFilter => {
            let filter = state.previous_filter(store);
            dispatch(Some(filter), state, store);
        }
        HotkeyAction::ShowAll => {
            let filter = state.show_filter(crate::store::Filter::All);
            dispatch(Some(filter), state, store);
        }
        HotkeyAction::ShowActive => {
            let filter = state.show_filter(crate::store::Filter::Active);
            dispatch(Some(filter), state, store);
        }
        HotkeyAction::ShowCompleted => {
            let filter = state.show_filter(crate::store::Filter::Completed);
            dispatch(Some(filter), state, store);
        }
        HotkeyAction::ToggleLog => state.toggle_log(),
        HotkeyAction::Quit => {
            debug!("Received application exit request.");
            return false;
        }
        HotkeyAction::NextField | HotkeyAction::Submit | HotkeyAction::Cancel => (),
    }
    true
}

fn handle_form_action(action: HotkeyAction, mode: Mode, state: &mut State, store: &mut TaskStore) {
    debug!("Processing form action {:?} in {:?}...", action, mode);
    match (action, mode) {
        (HotkeyAction::NextField, _) => state.next_field(),
        (HotkeyAction::Submit, Mode::AddForm) => {
            let add = state.submit_add();
            dispatch(add, state, store);
        }
        (HotkeyAction::Submit, _) => {
            let edit = state.save_edit();
            dispatch(edit, state, store);
        }
        (HotkeyAction::Cancel, Mode::AddForm) => state.focus_task_list(),
        (HotkeyAction::Cancel, _) => state.cancel_edit(),
        _ => (),
    }
}

fn handle_form_input(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.input_char(c)
        }
        KeyCode::Backspace => state.input_backspace(),
        _ => (),
    }
}

fn dispatch(action: Option<Action>, state: &mut State, store: &mut TaskStore) {
    if let Some(action) = action {
        store.dispatch(action, state.now());
        state.clamp_selection(store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Filter;
    use crate::utils::datetime::parse_deadline;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_keys(text: &str, state: &mut State, store: &mut TaskStore) {
        for c in text.chars() {
            assert!(handle_key(press(KeyCode::Char(c)), state, store));
        }
    }

    fn session() -> (State, TaskStore) {
        let mut state = State::default();
        state.set_now(parse_deadline("2024-01-01T12:00:00").unwrap());
        (state, TaskStore::new())
    }

    fn add(text: &str, deadline: &str, state: &mut State, store: &mut TaskStore) {
        handle_key(press(KeyCode::Char('a')), state, store);
        type_keys(text, state, store);
        handle_key(press(KeyCode::Tab), state, store);
        type_keys(deadline, state, store);
        handle_key(press(KeyCode::Enter), state, store);
        handle_key(press(KeyCode::Esc), state, store);
    }

    #[test]
    fn test_ctrl_c_exits_in_every_mode() {
        let (mut state, mut store) = session();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_key(ctrl_c, &mut state, &mut store));
        state.focus_add_form();
        assert!(!handle_key(ctrl_c, &mut state, &mut store));
    }

    #[test]
    fn test_quit_only_from_task_list() {
        let (mut state, mut store) = session();
        handle_key(press(KeyCode::Char('a')), &mut state, &mut store);
        assert!(handle_key(press(KeyCode::Char('q')), &mut state, &mut store));
        assert_eq!(state.add_form().text, "q");
        handle_key(press(KeyCode::Esc), &mut state, &mut store);
        assert!(!handle_key(press(KeyCode::Char('q')), &mut state, &mut store));
    }

    #[test]
    fn test_add_task_through_form() {
        let (mut state, mut store) = session();
        add("water plants", "2024-01-02T08:00", &mut state, &mut store);
        assert_eq!(store.len(), 1);
        let task = &store.tasks()[0];
        assert_eq!(task.text, "water plants");
        assert_eq!(task.deadline.as_deref(), Some("2024-01-02T08:00"));
        assert_eq!(state.mode(), Mode::TaskList);
    }

    #[test]
    fn test_incomplete_add_is_not_dispatched() {
        let (mut state, mut store) = session();
        handle_key(press(KeyCode::Char('a')), &mut state, &mut store);
        type_keys("no deadline", &mut state, &mut store);
        handle_key(press(KeyCode::Enter), &mut state, &mut store);
        assert!(store.is_empty());
        assert_eq!(state.add_form().text, "no deadline");
    }

    #[test]
    fn test_toggle_and_delete_selected() {
        let (mut state, mut store) = session();
        add("one", "2024-01-02T08:00", &mut state, &mut store);
        add("two", "2024-01-02T09:00", &mut state, &mut store);

        handle_key(press(KeyCode::Char(' ')), &mut state, &mut store);
        assert!(store.tasks()[0].completed);
        assert_eq!(store.tasks()[0].completed_date, Some(state.now()));

        handle_key(press(KeyCode::Char('j')), &mut state, &mut store);
        handle_key(press(KeyCode::Char('d')), &mut state, &mut store);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].text, "one");
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_edit_save_and_cancel() {
        let (mut state, mut store) = session();
        add("draft", "2024-01-02T08:00", &mut state, &mut store);

        handle_key(press(KeyCode::Char('e')), &mut state, &mut store);
        type_keys(" v2", &mut state, &mut store);
        handle_key(press(KeyCode::Esc), &mut state, &mut store);
        assert_eq!(store.tasks()[0].text, "draft");
        assert_eq!(state.mode(), Mode::TaskList);

        handle_key(press(KeyCode::Char('e')), &mut state, &mut store);
        type_keys(" v2", &mut state, &mut store);
        handle_key(press(KeyCode::Enter), &mut state, &mut store);
        assert_eq!(store.tasks()[0].text, "draft v2");
        assert_eq!(state.mode(), Mode::TaskList);
    }

    #[test]
    fn test_filter_keys() {
        let (mut state, mut store) = session();
        handle_key(press(KeyCode::Char('3')), &mut state, &mut store);
        assert_eq!(store.filter(), Filter::Completed);
        handle_key(press(KeyCode::Char('l')), &mut state, &mut store);
        assert_eq!(store.filter(), Filter::All);
        handle_key(press(KeyCode::Char('h')), &mut state, &mut store);
        assert_eq!(store.filter(), Filter::Completed);
        handle_key(press(KeyCode::Char('2')), &mut state, &mut store);
        assert_eq!(store.filter(), Filter::Active);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let (mut state, mut store) = session();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert!(handle_key(key, &mut state, &mut store));
    }

    #[test]
    fn test_shifted_characters_are_typed() {
        let (mut state, mut store) = session();
        handle_key(press(KeyCode::Char('a')), &mut state, &mut store);
        handle_key(
            KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT),
            &mut state,
            &mut store,
        );
        assert_eq!(state.add_form().text, "B");
    }
}
