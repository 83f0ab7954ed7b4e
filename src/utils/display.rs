//! Display and output formatting utilities

use crate::frontend::RunSummary;
use crate::game_of_life::{Grid, ALIVE};

/// Format grids and run results for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        grid.to_string()
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.columns() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for (y, row) in grid.iter_rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for &cell in row {
                output.push_str(if cell == ALIVE { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Grid statistics block
    pub fn format_statistics(grid: &Grid) -> String {
        let total = grid.rows() * grid.columns();
        let living = grid.living_count();

        format!(
            "Grid Statistics:\n  Size: {}x{}\n  Living cells: {}\n  Density: {:.1}%\n",
            grid.rows(),
            grid.columns(),
            living,
            (living as f64 / total as f64) * 100.0
        )
    }

    /// Human-readable run summary
    pub fn format_summary(summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str("Run Summary:\n");
        output.push_str(&format!("  Grid: {}x{}\n", summary.rows, summary.columns));
        output.push_str(&format!("  Generations: {}\n", summary.generations));
        output.push_str(&format!("  Steps taken: {}\n", summary.steps));
        output.push_str(&format!("  Living cells: {}\n", summary.living_cells));
        output.push_str(&format!("  Stopped: {}\n", summary.stop_reason));

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
