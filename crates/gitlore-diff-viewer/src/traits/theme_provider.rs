//! Trait for providing theme configuration to the viewer.

use ratatui::style::Color;

/// Provides theme colors for the viewer.
///
/// Implement this trait to integrate the viewer with an application's theme
/// system. Only the addition/deletion backgrounds are required.
pub trait ThemeProvider {
    /// Background color for addition lines.
    fn addition_background(&self) -> Color;

    /// Background color for deletion lines.
    fn deletion_background(&self) -> Color;

    /// Background color for context lines.
    fn context_background(&self) -> Color {
        Color::Reset
    }

    /// Foreground color for the `+` marker.
    fn addition_marker_foreground(&self) -> Color {
        Color::Green
    }

    /// Foreground color for the `-` marker.
    fn deletion_marker_foreground(&self) -> Color {
        Color::Red
    }

    /// Background color for hunk header lines.
    fn hunk_header_background(&self) -> Color {
        Color::Rgb(40, 40, 60)
    }

    /// Foreground color for hunk header text.
    fn hunk_header_foreground(&self) -> Color {
        Color::Cyan
    }

    /// Foreground color for line numbers.
    fn line_number_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color for file header paths.
    fn file_header_foreground(&self) -> Color {
        Color::White
    }

    /// Background color for the selected file's header.
    fn selected_file_background(&self) -> Color {
        Color::Rgb(50, 50, 80)
    }

    /// Foreground color for placeholders such as "No textual changes".
    fn placeholder_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color for the changeset summary line.
    fn summary_foreground(&self) -> Color {
        Color::Yellow
    }
}

/// Default theme with sensible dark-mode colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl ThemeProvider for DefaultTheme {
    fn addition_background(&self) -> Color {
        Color::Rgb(30, 60, 30) // dark green
    }

    fn deletion_background(&self) -> Color {
        Color::Rgb(60, 30, 30) // dark red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = DefaultTheme;
        assert_eq!(theme.addition_background(), Color::Rgb(30, 60, 30));
        assert_eq!(theme.deletion_background(), Color::Rgb(60, 30, 30));
        assert_eq!(theme.context_background(), Color::Reset);
    }
}
