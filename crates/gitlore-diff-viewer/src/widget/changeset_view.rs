//! Changeset widget: summary, file headers and classified diff lines.

use crate::highlight::highlight_or_plain;
use crate::state::ViewerState;
use crate::traits::{Highlighter, ThemeProvider};
use gitlore_diff::{ChangesetSummary, ClassifiedLine, FileView, LineKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, StatefulWidget, Widget};
use std::ops::Range;

/// Placeholder shown for files without hunks.
pub const NO_TEXTUAL_CHANGES: &str = "No textual changes";

/// Widget for rendering a whole changeset in one scrollable pane.
///
/// # Example
///
/// ```ignore
/// let mut highlighter = SyntectHighlighter::new();
/// let widget = ChangesetWidget::new(&mut highlighter, &DefaultTheme);
/// frame.render_stateful_widget(widget, area, &mut state);
/// ```
pub struct ChangesetWidget<'a, T: ThemeProvider> {
    /// Syntax highlighter.
    highlighter: &'a mut dyn Highlighter,
    /// Theme provider.
    theme: &'a T,
    /// Whether to draw a border around the pane.
    bordered: bool,
}

impl<'a, T: ThemeProvider> ChangesetWidget<'a, T> {
    /// Create a new changeset widget.
    pub fn new(highlighter: &'a mut dyn Highlighter, theme: &'a T) -> Self {
        Self {
            highlighter,
            theme,
            bordered: true,
        }
    }

    /// Draw without a border.
    pub fn borderless(mut self) -> Self {
        self.bordered = false;
        self
    }
}

impl<T: ThemeProvider> StatefulWidget for ChangesetWidget<'_, T> {
    type State = ViewerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ViewerState) {
        let inner = if self.bordered {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Changes ");
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        // Update viewport height from the actual render area
        state.handle_action(crate::ViewerAction::SetViewport {
            height: inner.height,
        });

        let start = state.scroll_offset;
        let rows = start..start + inner.height as usize;
        let lines = render_changeset(state, self.highlighter, self.theme, rows);
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Collects only the rows inside a window, counting the ones it skips.
struct RowWindow {
    range: Range<usize>,
    row: usize,
    lines: Vec<Line<'static>>,
}

impl RowWindow {
    fn push_with(&mut self, build: impl FnOnce() -> Line<'static>) {
        if self.range.contains(&self.row) {
            self.lines.push(build());
        }
        self.row += 1;
    }

    fn skip(&mut self, rows: usize) {
        self.row += rows;
    }

    fn is_past_end(&self) -> bool {
        self.row >= self.range.end
    }
}

/// Build the rows `rows` of the changeset layout (see [`ViewerState`]).
///
/// Only rows inside the window are built, so off-screen lines are never
/// highlighted.
pub fn render_changeset<T: ThemeProvider + ?Sized>(
    state: &ViewerState,
    highlighter: &mut dyn Highlighter,
    theme: &T,
    rows: Range<usize>,
) -> Vec<Line<'static>> {
    let mut window = RowWindow {
        range: rows,
        row: 0,
        lines: Vec::new(),
    };

    let changeset = state.changeset();
    window.push_with(|| {
        summary_line(
            &changeset.summary(),
            changeset.base.as_deref(),
            changeset.head.as_deref(),
            theme,
        )
    });

    for (idx, file) in changeset.files.iter().enumerate() {
        if window.is_past_end() {
            break;
        }

        // Files entirely above the window are never expanded
        let file_rows = state.file_rows(idx);
        if window.row + file_rows <= window.range.start {
            window.skip(file_rows);
            continue;
        }

        let view = state.presenter().present(file);
        let collapsed = state.is_collapsed(idx);
        let selected = idx == state.selected_file;
        window.push_with(|| file_header_line(&view, collapsed, selected, theme));

        if !collapsed {
            if view.has_textual_changes() {
                let width = view.line_number_width();
                for line in view.lines() {
                    window.push_with(|| {
                        diff_line(line, width, view.language, &mut *highlighter, theme)
                    });
                }
            } else {
                window.push_with(|| {
                    Line::from(Span::styled(
                        format!("    {}", NO_TEXTUAL_CHANGES),
                        Style::default()
                            .fg(theme.placeholder_foreground())
                            .add_modifier(Modifier::ITALIC),
                    ))
                });
            }
        }

        window.push_with(Line::default);
    }

    window.lines
}

fn summary_line<T: ThemeProvider + ?Sized>(
    summary: &ChangesetSummary,
    base: Option<&str>,
    head: Option<&str>,
    theme: &T,
) -> Line<'static> {
    let mut spans = Vec::new();
    if let (Some(base), Some(head)) = (base, head) {
        spans.push(Span::styled(
            format!("{}..{}  ", short_rev(base), short_rev(head)),
            Style::default().fg(theme.line_number_foreground()),
        ));
    }

    let noun = if summary.file_count == 1 { "file" } else { "files" };
    spans.push(Span::styled(
        format!("{} {} changed, ", summary.file_count, noun),
        Style::default()
            .fg(theme.summary_foreground())
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!("+{}", summary.total_additions),
        Style::default().fg(theme.addition_marker_foreground()),
    ));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        format!("-{}", summary.total_deletions),
        Style::default().fg(theme.deletion_marker_foreground()),
    ));
    Line::from(spans)
}

fn short_rev(rev: &str) -> &str {
    rev.get(..7).unwrap_or(rev)
}

fn file_header_line<T: ThemeProvider + ?Sized>(
    view: &FileView<'_>,
    collapsed: bool,
    selected: bool,
    theme: &T,
) -> Line<'static> {
    let mut base = Style::default()
        .fg(theme.file_header_foreground())
        .add_modifier(Modifier::BOLD);
    if selected {
        base = base.bg(theme.selected_file_background());
    }

    let fold = if collapsed { "▸" } else { "▾" };
    Line::from(vec![
        Span::styled(
            format!("{} {} {}", fold, view.file.status.as_char(), view.display_path),
            base,
        ),
        Span::styled("  ", base),
        Span::styled(
            format!("+{}", view.file.additions),
            base.fg(theme.addition_marker_foreground()),
        ),
        Span::styled(" ", base),
        Span::styled(
            format!("-{}", view.file.deletions),
            base.fg(theme.deletion_marker_foreground()),
        ),
    ])
}

fn diff_line<T: ThemeProvider + ?Sized>(
    line: &ClassifiedLine,
    width: usize,
    language: Option<&str>,
    highlighter: &mut dyn Highlighter,
    theme: &T,
) -> Line<'static> {
    if line.kind == LineKind::HunkHeader {
        let style = Style::default()
            .fg(theme.hunk_header_foreground())
            .bg(theme.hunk_header_background());
        return Line::from(Span::styled(line.text.clone(), style));
    }

    let (bg, marker_fg) = match line.kind {
        LineKind::Addition => (
            theme.addition_background(),
            theme.addition_marker_foreground(),
        ),
        LineKind::Deletion => (
            theme.deletion_background(),
            theme.deletion_marker_foreground(),
        ),
        _ => (theme.context_background(), theme.line_number_foreground()),
    };
    let base = Style::default().bg(bg);
    let gutter = base.fg(theme.line_number_foreground());

    let number = |n: Option<u32>| match n {
        Some(n) => format!("{:>width$}", n, width = width),
        None => " ".repeat(width),
    };

    let mut spans = vec![
        Span::styled(number(line.old_line_number), gutter),
        Span::styled(" ", base),
        Span::styled(number(line.new_line_number), gutter),
        Span::styled(" ", base),
        Span::styled(line.kind.prefix().to_string(), base.fg(marker_fg)),
    ];

    for span in highlight_or_plain(highlighter, &line.text, language) {
        let mut style = base;
        if let Some(fg) = span.fg {
            style = style.fg(fg);
        }
        if span.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if span.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if span.underline {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(span.text.replace('\t', "    "), style));
    }

    Line::from(spans)
}
