use super::Frame;
use crate::state::State;
use crate::store::{Filter, TaskStore};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

const TITLE: &str = "To-do list";

/// Render title and filter tabs, highlighting the active filter.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State, store: &TaskStore) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(Span::styled(TITLE, styling::banner_style(theme)));

    let titles: Vec<Line> = Filter::ALL
        .iter()
        .map(|filter| Line::from(filter.label()))
        .collect();
    let selected = Filter::ALL
        .iter()
        .position(|filter| *filter == store.filter())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected)
        .style(styling::muted_text_style(theme))
        .highlight_style(
            styling::normal_text_style(theme)
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    frame.render_widget(tabs, size);
}
