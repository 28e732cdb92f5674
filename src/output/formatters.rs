//! Formatting utilities for terminal output

/// Render a board string with spaced, uppercased cells, e.g. `J A _ _`
#[must_use]
pub fn format_board(board: &str) -> String {
    board
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a letter score as a bar relative to the best score in the table
#[must_use]
pub fn score_bar(score: f64, best: f64, width: usize) -> String {
    if best <= 0.0 {
        return create_progress_bar(0.0, 1.0, width);
    }
    create_progress_bar(score, best, width)
}
