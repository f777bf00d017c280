use super::{Filter, TaskId};

/// Describes a single mutation of the task store.
///
/// The view never touches tasks directly; it produces actions and hands them
/// to `TaskStore::dispatch`.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    AddTask { text: String, deadline: String },
    ToggleComplete(TaskId),
    DeleteTask(TaskId),
    EditTask {
        id: TaskId,
        text: String,
        deadline: String,
    },
    SetFilter(Filter),
}
