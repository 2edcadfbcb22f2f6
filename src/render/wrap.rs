//! Greedy word wrapping against measured text widths.

/// Split `text` into lines no wider than `max_width`.
///
/// Words are separated by single spaces and accumulated greedily. A word that
/// would overflow starts a new line unless the current line is still empty,
/// so a single over-long word stays on its own line. Lines are trimmed.
/// Widths are measured with a trailing space, the way the candidate line
/// would be set.
pub fn wrap_text<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split(' ') {
        let candidate = format!("{line}{word} ");
        if !line.is_empty() && measure(&candidate) > max_width {
            lines.push(line.trim().to_string());
            line = format!("{word} ");
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line.trim().to_string());
    }
    lines
}

/// Baseline of the first of `line_count` lines so the block is vertically
/// centered on `center_y`.
pub fn block_start_y(center_y: f64, line_count: usize, line_height: f64) -> f64 {
    center_y - line_count.saturating_sub(1) as f64 * line_height / 2.0
}
