/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: icons only in the header, short status line
    Compact,
    /// 60-99 cols: toolbar labels, no search box
    Normal,
    /// 100+ cols: everything, including the search placeholder
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}
