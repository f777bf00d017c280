use super::{Action, Filter, Task, TaskId};
use chrono::NaiveDateTime;
use log::*;

/// Houses the canonical list of tasks and the active filter.
///
/// All mutations are synchronous and trust their input: text and deadline
/// validation happens in the view before an action is produced. Operations
/// addressing an unknown id leave the store untouched.
///
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
    next_id: u64,
}

impl TaskStore {
    /// Return a new, empty store showing all tasks.
    ///
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Apply the given action. `now` is used as the completion time when a
    /// task is marked complete.
    ///
    pub fn dispatch(&mut self, action: Action, now: NaiveDateTime) {
        debug!("Dispatching store action {:?}...", action);
        match action {
            Action::AddTask { text, deadline } => {
                self.add_task(text, deadline);
            }
            Action::ToggleComplete(id) => self.toggle_complete(id, now),
            Action::DeleteTask(id) => self.delete_task(id),
            Action::EditTask { id, text, deadline } => self.edit_task(id, text, deadline),
            Action::SetFilter(filter) => self.set_filter(filter),
        }
    }

    /// Append a new incomplete task and return its identifier.
    ///
    pub fn add_task(&mut self, text: String, deadline: String) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push(Task {
            id,
            text,
            deadline: Some(deadline),
            completed: false,
            completed_date: None,
        });
        debug!("Added task {} ({} total).", id, self.tasks.len());
        id
    }

    /// Flip the completion flag of the task, stamping or clearing its
    /// completion date accordingly.
    ///
    pub fn toggle_complete(&mut self, id: TaskId, now: NaiveDateTime) {
        match self.find_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                task.completed_date = if task.completed { Some(now) } else { None };
                debug!("Task {} completed: {}.", id, task.completed);
            }
            None => warn!("Ignoring toggle of unknown task {}.", id),
        }
    }

    /// Remove the task with the given identifier.
    ///
    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            warn!("Ignoring delete of unknown task {}.", id);
        } else {
            debug!("Deleted task {}.", id);
        }
    }

    /// Overwrite text and deadline of the task, keeping everything else.
    ///
    pub fn edit_task(&mut self, id: TaskId, text: String, deadline: String) {
        match self.find_mut(id) {
            Some(task) => {
                task.text = text;
                task.deadline = Some(deadline);
                debug!("Edited task {}.", id);
            }
            None => warn!("Ignoring edit of unknown task {}.", id),
        }
    }

    /// Replace the active filter.
    ///
    pub fn set_filter(&mut self, filter: Filter) {
        debug!("Filter set to {:?}.", filter);
        self.filter = filter;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}
