//! Form editing state types.
//!
//! This module contains the scratch buffers backing the add-task form and the
//! inline edit of a task.

use super::navigation::FormField;
use crate::store::{Task, TaskId};

/// Unsaved text and deadline input.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub text: String,
    pub deadline: String,
}

impl TaskForm {
    /// Return the buffer of the given field.
    ///
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Text => &self.text,
            FormField::Deadline => &self.deadline,
        }
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        self.buffer_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: FormField) {
        self.buffer_mut(field).pop();
    }

    /// Text must be non-blank and a deadline must be present.
    ///
    pub fn is_submittable(&self) -> bool {
        !self.text.trim().is_empty() && !self.deadline.is_empty()
    }

    fn buffer_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Text => &mut self.text,
            FormField::Deadline => &mut self.deadline,
        }
    }
}

/// An in-progress edit of one task.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    pub id: TaskId,
    pub form: TaskForm,
    pub field: FormField,
}

impl EditSession {
    /// Start editing the task with its current values pre-filled.
    ///
    pub fn for_task(task: &Task) -> Self {
        EditSession {
            id: task.id,
            form: TaskForm {
                text: task.text.clone(),
                deadline: task.deadline.clone().unwrap_or_default(),
            },
            field: FormField::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn test_push_and_pop() {
        let mut form = TaskForm::default();
        form.push_char(FormField::Text, 'a');
        form.push_char(FormField::Text, 'b');
        form.push_char(FormField::Deadline, '2');
        form.pop_char(FormField::Text);
        assert_eq!(form.value(FormField::Text), "a");
        assert_eq!(form.value(FormField::Deadline), "2");
        form.pop_char(FormField::Deadline);
        form.pop_char(FormField::Deadline);
        assert_eq!(form.value(FormField::Deadline), "");
    }

    #[test]
    fn test_is_submittable() {
        let mut form = TaskForm {
            text: "   ".to_string(),
            deadline: "2024-01-01T10:00".to_string(),
        };
        assert!(!form.is_submittable());
        form.text = " buy milk ".to_string();
        assert!(form.is_submittable());
        form.deadline.clear();
        assert!(!form.is_submittable());
    }

    #[test]
    fn test_edit_session_prefills_task_values() {
        let task = Task {
            deadline: None,
            ..Faker.fake()
        };
        let session = EditSession::for_task(&task);
        assert_eq!(session.id, task.id);
        assert_eq!(session.form.text, task.text);
        assert_eq!(session.form.deadline, "");
        assert_eq!(session.field, FormField::Text);
    }
}
