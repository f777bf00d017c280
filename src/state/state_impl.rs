use super::derived::{display_rows, grouped_tasks};
use super::form::{EditSession, TaskForm};
use super::navigation::{Focus, FormField, Mode};
use crate::config::{Config, ModeHotkeys};
use crate::logger::LogBuffer;
use crate::store::{Action, Filter, Task, TaskId, TaskStore};
use crate::ui::Theme;
use chrono::NaiveDateTime;
use log::*;

/// Houses the transient state of one view session.
///
/// The session never mutates tasks itself. Operations that would change the
/// store return an `Action` for the caller to dispatch.
///
pub struct State {
    focus: Focus,
    add_form: TaskForm,
    add_field: FormField,
    edit_session: Option<EditSession>,
    selected_index: usize,
    log_visible: bool,
    log_buffer: LogBuffer,
    theme: Theme,
    hotkeys: ModeHotkeys,
    date_format: String,
    datetime_format: String,
    now: NaiveDateTime,
}

/// Defines default session state.
///
impl Default for State {
    fn default() -> State {
        State::new(&Config::default(), Theme::default(), LogBuffer::new())
    }
}

impl State {
    pub fn new(config: &Config, theme: Theme, log_buffer: LogBuffer) -> Self {
        State {
            focus: Focus::TaskList,
            add_form: TaskForm::default(),
            add_field: FormField::Text,
            edit_session: None,
            selected_index: 0,
            log_visible: false,
            log_buffer,
            theme,
            hotkeys: config.hotkeys.clone(),
            date_format: config.date_format.clone(),
            datetime_format: config.datetime_format.clone(),
            now: crate::utils::datetime::now(),
        }
    }

    /// Return the input mode. An active edit takes precedence over focus.
    ///
    pub fn mode(&self) -> Mode {
        if self.edit_session.is_some() {
            Mode::EditTask
        } else {
            match self.focus {
                Focus::TaskList => Mode::TaskList,
                Focus::AddForm => Mode::AddForm,
            }
        }
    }

    pub fn current_focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_add_form(&mut self) {
        debug!("Focusing add form...");
        self.focus = Focus::AddForm;
    }

    pub fn focus_task_list(&mut self) {
        debug!("Focusing task list...");
        self.focus = Focus::TaskList;
    }

    pub fn add_form(&self) -> &TaskForm {
        &self.add_form
    }

    pub fn add_field(&self) -> FormField {
        self.add_field
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit_session.as_ref()
    }

    /// Type a character into the field of the active form.
    ///
    pub fn input_char(&mut self, c: char) {
        match self.edit_session.as_mut() {
            Some(session) => session.form.push_char(session.field, c),
            None => self.add_form.push_char(self.add_field, c),
        }
    }

    /// Remove the last character of the field of the active form.
    ///
    pub fn input_backspace(&mut self) {
        match self.edit_session.as_mut() {
            Some(session) => session.form.pop_char(session.field),
            None => self.add_form.pop_char(self.add_field),
        }
    }

    /// Move input to the other field of the active form.
    ///
    pub fn next_field(&mut self) {
        match self.edit_session.as_mut() {
            Some(session) => session.field = session.field.next(),
            None => self.add_field = self.add_field.next(),
        }
    }

    /// Whether the add form may be submitted.
    ///
    pub fn can_submit_add(&self) -> bool {
        self.add_form.is_submittable()
    }

    /// Submit the add form. Returns the action to dispatch and clears the
    /// form, or returns `None` and keeps the input when it is incomplete.
    ///
    pub fn submit_add(&mut self) -> Option<Action> {
        if !self.add_form.is_submittable() {
            debug!("Add form incomplete, nothing to submit.");
            return None;
        }
        let form = std::mem::take(&mut self.add_form);
        self.add_field = FormField::Text;
        Some(Action::AddTask {
            text: form.text,
            deadline: form.deadline,
        })
    }

    /// Begin editing the task. Replaces any edit already in progress without
    /// saving it.
    ///
    pub fn start_edit(&mut self, task: &Task) {
        if let Some(previous) = &self.edit_session {
            debug!("Discarding unsaved edit of task {}.", previous.id);
        }
        debug!("Editing task {}...", task.id);
        self.edit_session = Some(EditSession::for_task(task));
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.edit_session
            .as_ref()
            .map(|session| session.id == id)
            .unwrap_or(false)
    }

    /// Whether the current edit may be saved.
    ///
    pub fn can_save_edit(&self) -> bool {
        self.edit_session
            .as_ref()
            .map(|session| session.form.is_submittable())
            .unwrap_or(false)
    }

    /// Save the current edit. Returns the action to dispatch and ends the
    /// edit, or returns `None` and stays in the edit when input is incomplete.
    ///
    pub fn save_edit(&mut self) -> Option<Action> {
        if !self.can_save_edit() {
            debug!("Edit incomplete, nothing to save.");
            return None;
        }
        self.edit_session.take().map(|session| Action::EditTask {
            id: session.id,
            text: session.form.text,
            deadline: session.form.deadline,
        })
    }

    /// Leave the current edit, discarding its scratch buffer.
    ///
    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.edit_session.take() {
            debug!("Cancelled edit of task {}.", session.id);
        }
    }

    /// Return the tasks as listed on screen: filtered and grouped.
    ///
    pub fn visible_rows<'a>(&self, store: &'a TaskStore) -> Vec<&'a Task> {
        display_rows(&grouped_tasks(
            store.tasks(),
            store.filter(),
            &self.date_format,
        ))
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_task<'a>(&self, store: &'a TaskStore) -> Option<&'a Task> {
        self.visible_rows(store).get(self.selected_index).copied()
    }

    /// Select the next row, wrapping around.
    ///
    pub fn select_next(&mut self, store: &TaskStore) {
        let count = self.visible_rows(store).len();
        self.selected_index = match count {
            0 => 0,
            _ => (self.selected_index + 1) % count,
        };
    }

    /// Select the previous row, wrapping around.
    ///
    pub fn select_previous(&mut self, store: &TaskStore) {
        let count = self.visible_rows(store).len();
        self.selected_index = match (count, self.selected_index) {
            (0, _) => 0,
            (_, 0) => count - 1,
            (_, index) => index - 1,
        };
    }

    /// Keep the selection on an existing row after the list shrank.
    ///
    pub fn clamp_selection(&mut self, store: &TaskStore) {
        let count = self.visible_rows(store).len();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    pub fn toggle_selected(&self, store: &TaskStore) -> Option<Action> {
        self.selected_task(store)
            .map(|task| Action::ToggleComplete(task.id))
    }

    pub fn delete_selected(&self, store: &TaskStore) -> Option<Action> {
        self.selected_task(store).map(|task| Action::DeleteTask(task.id))
    }

    /// Start editing the selected task, if any.
    ///
    pub fn edit_selected(&mut self, store: &TaskStore) {
        if let Some(task) = self.selected_task(store) {
            self.start_edit(task);
        }
    }

    pub fn show_filter(&self, filter: Filter) -> Action {
        Action::SetFilter(filter)
    }

    pub fn next_filter(&self, store: &TaskStore) -> Action {
        Action::SetFilter(store.filter().next())
    }

    pub fn previous_filter(&self, store: &TaskStore) -> Action {
        Action::SetFilter(store.filter().previous())
    }

    pub fn toggle_log(&mut self) {
        self.log_visible = !self.log_visible;
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn log_entries(&self) -> Vec<String> {
        self.log_buffer.entries()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn hotkeys(&self) -> &ModeHotkeys {
        &self.hotkeys
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn datetime_format(&self) -> &str {
        &self.datetime_format
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Refresh the clock used for deadline colors and completion stamps.
    ///
    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.now = now;
    }
}
