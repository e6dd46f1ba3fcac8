//! Column schema
//!
//! Fixed for the lifetime of the process: defines both the left-to-right
//! render order and the set of editable fields on every row.

use serde::Serialize;

/// A single column definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    /// Stable key used to address cells
    pub key: &'static str,
    /// Header label
    pub label: &'static str,
    /// Width hint in pixels
    pub width_px: u16,
}

impl ColumnDef {
    const fn new(key: &'static str, label: &'static str, width_px: u16) -> Self {
        Self {
            key,
            label,
            width_px,
        }
    }

    /// Terminal width in cells (10px per cell)
    pub fn char_width(&self) -> u16 {
        (self.width_px / 10).max(1)
    }
}

/// The nine columns, in display order
pub static COLUMNS: [ColumnDef; 9] = [
    ColumnDef::new("job-request", "Job Request", 250),
    ColumnDef::new("submitted", "Submitted", 120),
    ColumnDef::new("status", "Status", 120),
    ColumnDef::new("submitter", "Submitter", 150),
    ColumnDef::new("url", "URL", 150),
    ColumnDef::new("assigned", "Assigned", 150),
    ColumnDef::new("priority", "Priority", 100),
    ColumnDef::new("due-date", "Due Date", 120),
    ColumnDef::new("est-value", "Est. Value", 150),
];

/// Look up a column definition by key
pub fn column_def(key: &str) -> Option<&'static ColumnDef> {
    COLUMNS.iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_order_and_widths() {
        let keys: Vec<_> = COLUMNS.iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            [
                "job-request",
                "submitted",
                "status",
                "submitter",
                "url",
                "assigned",
                "priority",
                "due-date",
                "est-value"
            ]
        );
        assert_eq!(COLUMNS[0].char_width(), 25);
        assert_eq!(COLUMNS[6].char_width(), 10);
    }

    #[test]
    fn lookup_by_key() {
        assert_eq!(column_def("est-value").map(|c| c.label), Some("Est. Value"));
        assert!(column_def("Est. Value").is_none());
    }
}
