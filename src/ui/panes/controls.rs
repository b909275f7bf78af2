//! Header pane listing the key bindings

use crate::engine::{Algorithm, Direction};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the control help, marking the selected direction and algorithm
pub fn render_controls_pane(
    frame: &mut Frame,
    area: Rect,
    direction: Direction,
    algorithm: Algorithm,
) {
    let block = Block::default()
        .title(" Sorting Algorithm Visualization ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let sep = || Span::styled(" | ", Style::default().fg(DEFAULT_THEME.comment));

    let controls = Line::from(vec![
        option("R - Reset", false),
        sep(),
        option("SPACE - Start Sorting", false),
        sep(),
        option("A - Ascending", direction == Direction::Ascending),
        sep(),
        option("D - Descending", direction == Direction::Descending),
    ]);

    let sorting = Line::from(vec![
        option("I - Insertion Sort", algorithm == Algorithm::Insertion),
        sep(),
        option("B - Bubble Sort", algorithm == Algorithm::Bubble),
        sep(),
        option("+/- - Speed", false),
        sep(),
        option("Q - Quit", false),
    ]);

    let paragraph = Paragraph::new(vec![controls, sorting])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn option(text: &'static str, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            text,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text, Style::default().fg(DEFAULT_THEME.fg))
    }
}
