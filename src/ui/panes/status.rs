//! Status bar rendering with run state and counters

use crate::engine::{Algorithm, Direction};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Where the visualizer is in its sort lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No run yet since the last reset
    Ready,
    /// A run is active and stepping every tick
    Sorting,
    /// The last run finished and the sequence has not been regenerated
    Sorted,
}

impl RunState {
    pub fn label(self) -> &'static str {
        match self {
            RunState::Ready => " READY ",
            RunState::Sorting => " ▶ SORTING ",
            RunState::Sorted => " ✔ SORTED ",
        }
    }

    fn color(self) -> Color {
        match self {
            RunState::Ready => DEFAULT_THEME.primary,
            RunState::Sorting => DEFAULT_THEME.secondary,
            RunState::Sorted => DEFAULT_THEME.success,
        }
    }
}

/// Everything the status bar shows
#[derive(Debug, Clone, Copy)]
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub state: RunState,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub comparisons: usize,
    pub swaps: usize,
    pub fps: u32,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_bg = Style::default().bg(DEFAULT_THEME.status_bg);

    // Left side: state badge and message
    let left_spans = vec![
        Span::styled(
            data.state.label(),
            Style::default()
                .bg(data.state.color())
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", bar_bg.fg(DEFAULT_THEME.comment)),
        Span::styled(format!(" {} ", data.message), bar_bg.fg(DEFAULT_THEME.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_bg)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: selections and counters
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_bg.fg(DEFAULT_THEME.fg);
    let sep_style = bar_bg.fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(format!(" {} ", data.algorithm), key_style),
        Span::styled(format!(" {} ", data.direction), desc_style),
        Span::styled("│", sep_style),
        Span::styled(format!(" cmp {} ", data.comparisons), desc_style),
        Span::styled("│", sep_style),
        Span::styled(format!(" swp {} ", data.swaps), desc_style),
        Span::styled("│", sep_style),
        Span::styled(format!(" {} fps ", data.fps), desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_bg)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
