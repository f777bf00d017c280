use super::Frame;
use crate::config::hotkeys::build_footer_text;
use crate::config::HotkeyAction;
use crate::state::{Mode, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Format hotkeys for the current mode as a display string.
///
fn format_hotkeys_for_mode(mode: Mode, state: &State) -> String {
    let hotkeys = state.hotkeys().for_mode(mode);
    match mode {
        Mode::TaskList => build_footer_text(
            hotkeys,
            &[
                (
                    HotkeyAction::NavigateNext,
                    "navigate",
                    Some(HotkeyAction::NavigatePrev),
                ),
                (HotkeyAction::ToggleComplete, "toggle", None),
                (HotkeyAction::FocusAddForm, "add", None),
                (HotkeyAction::EditTask, "edit", None),
                (HotkeyAction::DeleteTask, "delete", None),
                (
                    HotkeyAction::PrevFilter,
                    "filter",
                    Some(HotkeyAction::NextFilter),
                ),
                (HotkeyAction::ToggleLog, "log", None),
                (HotkeyAction::Quit, "quit", None),
            ],
        ),
        Mode::AddForm => build_footer_text(
            hotkeys,
            &[
                (HotkeyAction::NextField, "switch field", None),
                (HotkeyAction::Submit, "add", None),
                (HotkeyAction::Cancel, "back", None),
            ],
        ),
        Mode::EditTask => build_footer_text(
            hotkeys,
            &[
                (HotkeyAction::NextField, "switch field", None),
                (HotkeyAction::Submit, "save", None),
                (HotkeyAction::Cancel, "cancel", None),
            ],
        ),
    }
}

/// Render footer with the mode indicator, hotkey hints and version.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let mode = state.mode();
    let controls_text = format_hotkeys_for_mode(mode, state);

    let (label, color) = match mode {
        Mode::TaskList => ("TASKS:", theme.footer_list),
        Mode::AddForm => ("ADD:", theme.footer_form),
        Mode::EditTask => ("EDIT:", theme.footer_edit),
    };
    let controls_content = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(color.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            controls_text,
            Style::default().fg(theme.text_secondary.to_color()),
        ),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme.text_muted.to_color()),
    )]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
