//! Fixed-size text status panel.
//!
//! The driver-facing status display is [`LINES`] rows of exactly [`LINE_WIDTH`]
//! characters. A [`Panel`] is rebuilt every control cycle and handed to a [`PanelSink`],
//! which owns the actual screen.

use core::fmt::{self, Write};

use thiserror::Error;

/// Number of rows on the panel.
pub const LINES: usize = 6;

/// Characters per row.
pub const LINE_WIDTH: usize = 21;

/// Errors returned when addressing the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PanelError {
    /// Row index is past the bottom of the panel.
    #[error("line {index} is out of range (panel has {} lines)", LINES)]
    LineOutOfRange {
        /// Requested row.
        index: usize,
    },
}

/// Six rows of 21 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    lines: [String; LINES],
}

impl Panel {
    /// Creates a blank panel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| " ".repeat(LINE_WIDTH)),
        }
    }

    /// Replaces row `index` with `text`, truncated or space-padded to [`LINE_WIDTH`].
    ///
    /// ```
    /// use trackbot_display::{LINE_WIDTH, Panel};
    ///
    /// let mut panel = Panel::new();
    /// panel.set_line(0, "Mode: Align")?;
    /// assert_eq!(panel.line(0)?.trim_end(), "Mode: Align");
    /// assert_eq!(panel.line(0)?.chars().count(), LINE_WIDTH);
    /// # Ok::<(), trackbot_display::PanelError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::LineOutOfRange`] if `index >= LINES`.
    pub fn set_line(&mut self, index: usize, text: &str) -> Result<(), PanelError> {
        let line = self
            .lines
            .get_mut(index)
            .ok_or(PanelError::LineOutOfRange { index })?;

        line.clear();
        line.extend(text.chars().take(LINE_WIDTH).map(printable));
        let len = line.chars().count();
        line.extend(core::iter::repeat_n(' ', LINE_WIDTH - len));
        Ok(())
    }

    /// Formats into row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::LineOutOfRange`] if `index >= LINES`.
    pub fn set_line_fmt(
        &mut self,
        index: usize,
        args: fmt::Arguments<'_>,
    ) -> Result<(), PanelError> {
        let mut text = String::with_capacity(LINE_WIDTH);
        // Writing to a String cannot fail.
        _ = text.write_fmt(args);
        self.set_line(index, &text)
    }

    /// Row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::LineOutOfRange`] if `index >= LINES`.
    pub fn line(&self, index: usize) -> Result<&str, PanelError> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(PanelError::LineOutOfRange { index })
    }

    /// All rows, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

/// A screen that can show a [`Panel`].
pub trait PanelSink {
    /// Error returned when drawing fails.
    type Error;

    /// Draws every row of `panel`.
    fn show(&mut self, panel: &Panel) -> Result<(), Self::Error>;
}

/// Control characters would shift the remaining columns.
fn printable(c: char) -> char {
    if c.is_control() { ' ' } else { c }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_panel_is_blank() {
        let panel = Panel::new();
        assert_eq!(panel.lines().count(), LINES);
        assert!(panel.lines().all(|l| l == " ".repeat(LINE_WIDTH)));
    }

    #[test]
    fn long_lines_are_truncated() {
        let mut panel = Panel::new();
        panel
            .set_line(5, "this line is much longer than the panel")
            .unwrap();
        assert_eq!(panel.line(5).unwrap(), "this line is much lon");
    }

    #[test]
    fn every_line_is_fixed_width() {
        let mut panel = Panel::new();
        panel.set_line(0, "").unwrap();
        panel.set_line(1, "L:108.0 C:-- R:97.5").unwrap();
        panel.set_line(2, "tab\there\nnewline").unwrap();
        panel
            .set_line_fmt(3, format_args!("Spd {:+.2} {:+.2}", 0.5, -0.15))
            .unwrap();
        panel.set_line(4, "ünïcödé wïdth çhëck ✓✓✓").unwrap();

        for line in panel.lines() {
            assert_eq!(line.chars().count(), LINE_WIDTH, "{line:?}");
        }
        assert_eq!(panel.line(2).unwrap().trim_end(), "tab here newline");
        assert_eq!(panel.line(3).unwrap().trim_end(), "Spd +0.50 -0.15");
    }

    #[test]
    fn out_of_range_line() {
        let mut panel = Panel::new();
        assert_eq!(
            panel.set_line(LINES, "x"),
            Err(PanelError::LineOutOfRange { index: LINES })
        );
        assert!(panel.line(99).is_err());
    }
}
