//! Bar chart of the sequence

use crate::sequence::Sequence;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// Highlight applied to a single bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Left element of the last swap
    SwapLeft,
    /// Right element of the last swap
    SwapRight,
}

impl Highlight {
    pub fn color(self) -> Color {
        match self {
            Highlight::SwapLeft => DEFAULT_THEME.swap_left,
            Highlight::SwapRight => DEFAULT_THEME.swap_right,
        }
    }
}

/// Render the sequence as vertical bars, colouring any highlighted indices
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    sequence: &Sequence,
    highlights: &FxHashMap<usize, Highlight>,
    title: &str,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let Some((heights, max_height)) = bar_heights(sequence) else {
        let paragraph = Paragraph::new("(empty sequence)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let inner = block.inner(area);
    let columns = bar_columns(&heights, highlights, inner.width);
    let block = if columns.len() < heights.len() {
        // Values share columns
        block.title_bottom(
            Line::from(format!(
                " {} values in {} columns ",
                heights.len(),
                columns.len()
            ))
            .style(Style::default().fg(DEFAULT_THEME.comment)),
        )
    } else {
        block
    };
    let (bar_width, bar_gap) = bar_layout(inner.width, columns.len());

    let bars: Vec<Bar> = columns
        .iter()
        .map(|column| {
            let style = Style::default().fg(column.color);
            Bar::default()
                .value(column.height)
                .text_value(String::new())
                .style(style)
                .value_style(style)
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(max_height);

    frame.render_widget(chart, area);
}

/// Upper bound on bar heights handed to the chart widget, which multiplies
/// them by the row count internally.
pub const BAR_RESOLUTION: u64 = 10_000;

/// Scale each value relative to the sequence minimum.
///
/// Heights start at 1 so the smallest value is still drawn. Returns `None`
/// for an empty sequence. A sequence of identical values gives all bars
/// the full height of 1. Ranges wider than [`BAR_RESOLUTION`] are scaled
/// down proportionally.
pub fn bar_heights(sequence: &Sequence) -> Option<(Vec<u64>, u64)> {
    let min = sequence.min()?;
    let max = sequence.max()?;
    let span = max.abs_diff(min).saturating_add(1);

    let scale = |v: i64| -> u64 {
        let height = v.abs_diff(min).saturating_add(1);
        if span <= BAR_RESOLUTION {
            height
        } else {
            let scaled = u128::from(height) * u128::from(BAR_RESOLUTION) / u128::from(span);
            (scaled as u64).max(1)
        }
    };

    let heights = sequence.values().iter().map(|&v| scale(v)).collect();
    Some((heights, span.min(BAR_RESOLUTION)))
}

/// Width of each bar and the gap between bars for `count` bars in `width`
/// columns. Gaps are only used when each bar still gets at least two columns.
pub fn bar_layout(width: u16, count: usize) -> (u16, u16) {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    let slot = width / count;
    if slot >= 3 {
        (slot - 1, 1)
    } else {
        (slot.max(1), 0)
    }
}

/// One drawn bar, possibly standing for several adjacent values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColumn {
    pub height: u64,
    pub color: Color,
}

/// Map per-value heights onto at most `width` columns.
///
/// When every value fits, each gets its own column. Otherwise adjacent values
/// are merged: a column takes the tallest height in its range and the colour
/// of the first highlighted index in it, so a swap is never hidden.
pub fn bar_columns(
    heights: &[u64],
    highlights: &FxHashMap<usize, Highlight>,
    width: u16,
) -> Vec<BarColumn> {
    let count = heights.len();
    let width = usize::from(width.max(1));

    if count <= width {
        return heights
            .iter()
            .enumerate()
            .map(|(i, &height)| BarColumn {
                height,
                color: bar_color(i, highlights),
            })
            .collect();
    }

    (0..width)
        .map(|c| {
            let range = (c * count / width)..((c + 1) * count / width);
            let height = heights[range.clone()].iter().copied().max().unwrap_or(0);
            let color = range
                .clone()
                .find_map(|i| highlights.get(&i))
                .map(|h| h.color())
                .unwrap_or(DEFAULT_THEME.bar_shades[c % DEFAULT_THEME.bar_shades.len()]);
            BarColumn { height, color }
        })
        .collect()
}

fn bar_color(index: usize, highlights: &FxHashMap<usize, Highlight>) -> Color {
    highlights
        .get(&index)
        .map(|h| h.color())
        .unwrap_or(DEFAULT_THEME.bar_shades[index % DEFAULT_THEME.bar_shades.len()])
}
