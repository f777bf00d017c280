use super::Frame;
use crate::state::derived::{deadline_label, grouped_tasks, DeadlineStatus};
use crate::state::{EditSession, Focus, FormField, State};
use crate::store::{Task, TaskStore};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use crate::utils::datetime::format_datetime;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const BLOCK_TITLE: &str = "Tasks";
const EMPTY_TEXT: &str = "No tasks";

/// Render the filtered task list, one heading per date group.
///
pub fn task_list(frame: &mut Frame, size: Rect, state: &State, store: &TaskStore) {
    let theme = state.theme();
    let block = if state.current_focus() == Focus::TaskList || state.edit_session().is_some() {
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme))
            .title(BLOCK_TITLE)
    };

    let groups = grouped_tasks(store.tasks(), store.filter(), state.date_format());
    if groups.is_empty() {
        let empty = Paragraph::new(EMPTY_TEXT)
            .style(styling::muted_text_style(theme))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, size);
        return;
    }

    // Rows are numbered across groups; headings are not selectable
    let mut items: Vec<ListItem> = vec![];
    let mut selected_item = None;
    let mut row = 0;
    for group in &groups {
        items.push(ListItem::new(Line::from(Span::styled(
            group.key.clone(),
            styling::group_heading_style(theme),
        ))));
        for task in &group.tasks {
            if row == state.selected_index() {
                selected_item = Some(items.len());
            }
            let line = match state.edit_session() {
                Some(session) if session.id == task.id => edit_row(session, state, theme),
                _ => task_row(task, state, theme),
            };
            items.push(ListItem::new(line));
            row += 1;
        }
    }

    let mut list = List::new(items).block(block);
    if state.current_focus() == Focus::TaskList && state.edit_session().is_none() {
        list = list
            .highlight_style(styling::active_list_item_style(theme))
            .highlight_symbol("> ");
    }
    let mut list_state = ListState::default();
    list_state.select(selected_item);
    frame.render_stateful_widget(list, size, &mut list_state);
}

/// Build the line of a task: checkbox, text and deadline or completion time.
///
fn task_row<'a>(task: &'a Task, state: &State, theme: &Theme) -> Line<'a> {
    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    let text_style = if task.completed {
        styling::completed_text_style(theme)
    } else {
        styling::normal_text_style(theme)
    };
    let mut spans = vec![
        Span::styled(checkbox, styling::normal_text_style(theme)),
        Span::styled(task.text.as_str(), text_style),
        Span::raw("   "),
    ];

    if !task.completed {
        let deadline = task.deadline.as_deref();
        let status = DeadlineStatus::classify(deadline, state.now());
        spans.push(Span::styled(
            deadline_label(deadline, state.datetime_format()),
            styling::deadline_style(theme, status),
        ));
    } else if let Some(completed_date) = &task.completed_date {
        spans.push(Span::styled(
            format!(
                "Completed: {}",
                format_datetime(completed_date, state.datetime_format())
            ),
            styling::muted_text_style(theme),
        ));
    }
    Line::from(spans)
}

/// Build the line of the task being edited from the edit scratch buffer.
///
fn edit_row<'a>(session: &'a EditSession, state: &State, theme: &Theme) -> Line<'a> {
    let field_style = |field: FormField| {
        if session.field == field {
            styling::active_list_item_style(theme)
        } else {
            styling::normal_text_style(theme)
        }
    };
    // Dimmed while the edit cannot be saved
    let save_style = if state.can_save_edit() {
        styling::normal_text_style(theme).fg(theme.success.to_color())
    } else {
        styling::muted_text_style(theme)
    };
    Line::from(vec![
        Span::styled("Editing: ", styling::banner_style(theme)),
        Span::styled(session.form.text.as_str(), field_style(FormField::Text)),
        Span::raw(" | "),
        Span::styled(
            session.form.deadline.as_str(),
            field_style(FormField::Deadline),
        ),
        Span::raw("   "),
        Span::styled("[save]", save_style),
        Span::styled(" [cancel]", styling::muted_text_style(theme)),
    ])
}
