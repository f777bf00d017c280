use chrono::NaiveDateTime;
use fake::Dummy;
use std::fmt;

/// Identifier assigned by the store when a task is created.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Defines to-do data structure.
///
/// `deadline` holds the raw text entered by the user and is only parsed when
/// the task is displayed.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub deadline: Option<String>,
    pub completed: bool,
    pub completed_date: Option<NaiveDateTime>,
}

/// Specifying which tasks are displayed.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

impl Filter {
    /// All filters in display order.
    ///
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Return whether the task is visible under this filter.
    ///
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Return the tab label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Return the next filter, wrapping around.
    ///
    pub fn next(&self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Return the previous filter, wrapping around.
    ///
    pub fn previous(&self) -> Filter {
        match self {
            Filter::All => Filter::Completed,
            Filter::Active => Filter::All,
            Filter::Completed => Filter::Active,
        }
    }
}
