use super::Frame;
use crate::state::{Focus, FormField, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

const CURSOR: &str = "_";
const DEADLINE_HINT: &str = "Deadline (YYYY-MM-DDTHH:MM)";

/// Render the add-task form: text input, deadline input and submit button.
///
pub fn add_form(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let focused = state.current_focus() == Focus::AddForm && state.edit_session().is_none();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Min(20),
            Constraint::Length(9),
        ])
        .split(size);

    let form = state.add_form();
    for (field, title, chunk) in [
        (FormField::Text, "New task", chunks[0]),
        (FormField::Deadline, DEADLINE_HINT, chunks[1]),
    ] {
        let active = focused && state.add_field() == field;
        let mut value = form.value(field).to_string();
        let block = if active {
            value.push_str(CURSOR);
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme))
                .title(Span::styled(title, styling::active_block_title_style()))
        } else {
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme))
                .title(title)
        };
        let input = Paragraph::new(value)
            .style(styling::normal_text_style(theme))
            .block(block);
        frame.render_widget(input, chunk);
    }

    // Dimmed while the form cannot be submitted
    let button_style = if state.can_submit_add() {
        styling::active_list_item_style(theme)
    } else {
        styling::muted_text_style(theme)
    };
    let button = Paragraph::new(Span::styled("Add", button_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(button, chunks[2]);
}
