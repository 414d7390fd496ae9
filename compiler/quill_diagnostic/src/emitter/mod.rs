//! Diagnostic Emitters
//!
//! Human-readable terminal output, with ANSI styling controlled by
//! [`ColorMode`].

mod terminal;

pub(crate) use terminal::describe;
pub use terminal::TerminalEmitter;

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Always use colors.
    #[default]
    Always,
    /// Use colors when the output is a terminal.
    Auto,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean.
    ///
    /// `is_tty` comes from the CLI layer and only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// SGR attributes used by the emitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Style {
    Bold,
    Dim,
    Underline,
    Red,
    Yellow,
}

impl Style {
    fn code(self) -> u8 {
        match self {
            Style::Bold => 1,
            Style::Dim => 2,
            Style::Underline => 4,
            Style::Red => 31,
            Style::Yellow => 33,
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Append `text` to `out`, wrapped in `styles` when `colors` is set.
pub(crate) fn paint(out: &mut String, colors: bool, text: &str, styles: &[Style]) {
    if !colors || styles.is_empty() || text.is_empty() {
        out.push_str(text);
        return;
    }
    for style in styles {
        out.push_str("\x1b[");
        out.push_str(&style.code().to_string());
        out.push('m');
    }
    out.push_str(text);
    out.push_str(RESET);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_resolution() {
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert_eq!(ColorMode::default(), ColorMode::Always);
    }

    #[test]
    fn test_paint() {
        let mut out = String::new();
        paint(&mut out, true, "hi", &[Style::Bold, Style::Red]);
        assert_eq!(out, "\x1b[1m\x1b[31mhi\x1b[0m");

        let mut out = String::new();
        paint(&mut out, false, "hi", &[Style::Bold]);
        paint(&mut out, true, "", &[Style::Dim]);
        paint(&mut out, true, "!", &[]);
        assert_eq!(out, "hi!");
    }
}
