//! Derived view computations.
//!
//! Everything here is a pure function of the store contents, the configured
//! formats and the current time. It is recomputed on every frame.

use crate::store::{Filter, Task};
use crate::utils::datetime::{format_datetime, parse_deadline};
use chrono::{Duration, NaiveDateTime};

/// Group key for tasks without a deadline.
///
pub const UNDATED_GROUP: &str = "Undated";

/// Group key and label for deadlines that cannot be parsed.
///
pub const INVALID_DATE: &str = "Invalid date";

/// Label shown instead of a deadline when a task has none.
///
pub const NO_DEADLINE: &str = "No deadline";

/// Tasks sharing a grouping key, in source order.
///
#[derive(Debug, PartialEq, Eq)]
pub struct TaskGroup<'a> {
    pub key: String,
    pub tasks: Vec<&'a Task>,
}

/// Urgency of a deadline relative to now.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DeadlineStatus {
    Neutral,
    Overdue,
    DueSoon,
    PlentyOfTime,
}

impl DeadlineStatus {
    /// Classify a raw deadline. Missing or unparsable deadlines are neutral;
    /// anything up to and including 24 hours ahead is due soon.
    ///
    pub fn classify(deadline: Option<&str>, now: NaiveDateTime) -> DeadlineStatus {
        let deadline = match deadline.and_then(parse_deadline) {
            Some(deadline) => deadline,
            None => return DeadlineStatus::Neutral,
        };
        let remaining = deadline - now;
        if remaining < Duration::zero() {
            DeadlineStatus::Overdue
        } else if remaining > Duration::hours(24) {
            DeadlineStatus::PlentyOfTime
        } else {
            DeadlineStatus::DueSoon
        }
    }
}

/// Select the tasks visible under the filter, keeping their order.
///
pub fn tasks_to_show(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Return the grouping key of a task: its deadline date, or a bucket name.
///
pub fn group_key(task: &Task, date_format: &str) -> String {
    match task.deadline.as_deref() {
        None => UNDATED_GROUP.to_string(),
        Some(raw) => match parse_deadline(raw) {
            Some(deadline) => format_datetime(&deadline, date_format),
            None => INVALID_DATE.to_string(),
        },
    }
}

/// Group tasks by deadline date.
///
/// Groups come out in the order their key was first seen, not in calendar
/// order.
///
pub fn group_by_date<'a>(tasks: &[&'a Task], date_format: &str) -> Vec<TaskGroup<'a>> {
    let mut groups: Vec<TaskGroup<'a>> = vec![];
    for &task in tasks {
        let key = group_key(task, date_format);
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.tasks.push(task),
            None => groups.push(TaskGroup {
                key,
                tasks: vec![task],
            }),
        }
    }
    groups
}

/// Filter and group in one step.
///
pub fn grouped_tasks<'a>(tasks: &'a [Task], filter: Filter, date_format: &str) -> Vec<TaskGroup<'a>> {
    group_by_date(&tasks_to_show(tasks, filter), date_format)
}

/// Flatten groups into the row order they are displayed in.
///
pub fn display_rows<'a>(groups: &[TaskGroup<'a>]) -> Vec<&'a Task> {
    groups
        .iter()
        .flat_map(|group| group.tasks.iter().copied())
        .collect()
}

/// Return the deadline as displayed for an active task.
///
pub fn deadline_label(deadline: Option<&str>, datetime_format: &str) -> String {
    match deadline {
        None => NO_DEADLINE.to_string(),
        Some(raw) => match parse_deadline(raw) {
            Some(deadline) => format_datetime(&deadline, datetime_format),
            None => INVALID_DATE.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskId;

    const DATE_FORMAT: &str = "%Y-%m-%d";

    fn now() -> NaiveDateTime {
        parse_deadline("2024-01-01T12:00:00").unwrap()
    }

    fn task(id: u64, deadline: Option<&str>, completed: bool) -> Task {
        Task {
            id: TaskId(id),
            text: format!("task {}", id),
            deadline: deadline.map(str::to_string),
            completed,
            completed_date: if completed { Some(now()) } else { None },
        }
    }

    fn ids(tasks: &[&Task]) -> Vec<u64> {
        tasks.iter().map(|task| task.id.0).collect()
    }

    #[test]
    fn test_classify_deadlines() {
        assert_eq!(
            DeadlineStatus::classify(Some("2023-12-31T12:00:00"), now()),
            DeadlineStatus::Overdue
        );
        assert_eq!(
            DeadlineStatus::classify(Some("2024-01-03T00:00:00"), now()),
            DeadlineStatus::PlentyOfTime
        );
        assert_eq!(
            DeadlineStatus::classify(Some("2024-01-01T18:00:00"), now()),
            DeadlineStatus::DueSoon
        );
        assert_eq!(DeadlineStatus::classify(None, now()), DeadlineStatus::Neutral);
        assert_eq!(
            DeadlineStatus::classify(Some("not-a-date"), now()),
            DeadlineStatus::Neutral
        );
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(
            DeadlineStatus::classify(Some("2024-01-01T12:00:00"), now()),
            DeadlineStatus::DueSoon
        );
        assert_eq!(
            DeadlineStatus::classify(Some("2024-01-02T12:00:00"), now()),
            DeadlineStatus::DueSoon
        );
        assert_eq!(
            DeadlineStatus::classify(Some("2024-01-02T12:00:01"), now()),
            DeadlineStatus::PlentyOfTime
        );
        assert_eq!(
            DeadlineStatus::classify(Some("2024-01-01T11:59:59"), now()),
            DeadlineStatus::Overdue
        );
    }

    #[test]
    fn test_tasks_to_show() {
        let tasks = vec![
            task(1, None, false),
            task(2, None, true),
            task(3, None, false),
            task(4, None, true),
        ];
        assert_eq!(ids(&tasks_to_show(&tasks, Filter::All)), vec![1, 2, 3, 4]);
        assert_eq!(ids(&tasks_to_show(&tasks, Filter::Active)), vec![1, 3]);
        assert_eq!(ids(&tasks_to_show(&tasks, Filter::Completed)), vec![2, 4]);
    }

    #[test]
    fn test_group_same_day_different_times() {
        let tasks = vec![
            task(1, Some("2024-01-01T09:00"), false),
            task(2, None, false),
            task(3, Some("2024-01-01T21:00"), false),
        ];
        let groups = grouped_tasks(&tasks, Filter::All, DATE_FORMAT);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "2024-01-01");
        assert_eq!(ids(&groups[0].tasks), vec![1, 3]);
        assert_eq!(groups[1].key, UNDATED_GROUP);
        assert_eq!(ids(&groups[1].tasks), vec![2]);
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let tasks = vec![
            task(1, Some("2024-03-01T09:00"), false),
            task(2, Some("2024-01-01T09:00"), false),
            task(3, Some("2024-03-01T10:00"), false),
        ];
        let groups = grouped_tasks(&tasks, Filter::All, DATE_FORMAT);
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["2024-03-01", "2024-01-01"]);
        assert_eq!(ids(&display_rows(&groups)), vec![1, 3, 2]);
    }

    #[test]
    fn test_invalid_deadline_has_own_group() {
        let tasks = vec![task(1, Some("tomorrow"), false), task(2, None, false)];
        let groups = grouped_tasks(&tasks, Filter::All, DATE_FORMAT);
        assert_eq!(groups[0].key, INVALID_DATE);
        assert_eq!(groups[1].key, UNDATED_GROUP);
    }

    #[test]
    fn test_grouping_respects_filter() {
        let tasks = vec![
            task(1, Some("2024-01-01T09:00"), true),
            task(2, Some("2024-01-02T09:00"), false),
        ];
        let groups = grouped_tasks(&tasks, Filter::Active, DATE_FORMAT);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "2024-01-02");
    }

    #[test]
    fn test_group_key_uses_date_format() {
        let task = task(1, Some("2024-01-05T09:00"), false);
        assert_eq!(group_key(&task, "%d.%m.%Y"), "05.01.2024");
    }

    #[test]
    fn test_deadline_label() {
        assert_eq!(deadline_label(None, "%H:%M"), NO_DEADLINE);
        assert_eq!(deadline_label(Some("soon"), "%H:%M"), INVALID_DATE);
        assert_eq!(deadline_label(Some("2024-01-05T09:30"), "%H:%M"), "09:30");
    }
}
