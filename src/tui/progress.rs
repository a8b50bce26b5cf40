//! Spinner primitives for the loading splash and the `phrases` command.

use crate::tui::settings;
use std::time::Duration;

/// Spinner frame for `elapsed` time since the spinner started.
pub fn spinner_frame(elapsed: Duration) -> char {
    let idx = (elapsed.as_millis() / u128::from(settings::PROGRESS_TICK_MS)) as usize;
    settings::PROGRESS_FRAMES[idx % settings::PROGRESS_FRAMES.len()]
}

/// Splash text: `[frame] label (1.5s)`.
pub fn progress_line(label: &str, elapsed: Duration) -> String {
    // Keep elapsed formatting stable so tests can assert deterministic text.
    let elapsed_s = elapsed.as_millis() as f64 / 1000.0;
    format!("[{}] {label} ({elapsed_s:.1}s)", spinner_frame(elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line_contains_frame_label_and_elapsed() {
        let out = progress_line("loading portfolio", Duration::from_millis(1300));
        assert_eq!(out, "[/] loading portfolio (1.3s)");
    }

    #[test]
    fn spinner_advances_every_tick() {
        assert_eq!(spinner_frame(Duration::ZERO), '|');
        assert_eq!(spinner_frame(Duration::from_millis(100)), '/');
        assert_eq!(spinner_frame(Duration::from_millis(399)), '\\');
        assert_eq!(spinner_frame(Duration::from_millis(400)), '|');
    }
}
