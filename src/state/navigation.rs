//! Navigation-related state types.
//!
//! This module contains enums describing focus and the input mode the view
//! session is in.

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    TaskList,
    AddForm,
}

/// Specifying the input mode, derived from focus and edit state.
///
/// Each mode has its own hotkey table.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Mode {
    TaskList,
    AddForm,
    EditTask,
}

/// Specifying the field of a task form receiving input.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Text,
    Deadline,
}

impl FormField {
    /// Return the other field.
    ///
    pub fn next(&self) -> FormField {
        match self {
            FormField::Text => FormField::Deadline,
            FormField::Deadline => FormField::Text,
        }
    }
}
