//! Footer tab selection
//!
//! Purely presentational: the active tab changes styling only, never the data.

use super::SheetError;

/// The fixed footer tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    AllOrders,
    Pending,
    Reviewed,
    Arrived,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::AllOrders, Tab::Pending, Tab::Reviewed, Tab::Arrived]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::AllOrders => "All Orders",
            Tab::Pending => "Pending",
            Tab::Reviewed => "Reviewed",
            Tab::Arrived => "Arrived",
        }
    }

    /// Exact label match
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.label() == label)
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let tabs = Self::all();
        tabs[(self.index() + 1) % tabs.len()]
    }

    pub fn prev(self) -> Self {
        let tabs = Self::all();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }
}

/// Tracks which footer tab is active
#[derive(Debug, Clone, Default)]
pub struct TabSelector {
    active: Tab,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn active_label(&self) -> &'static str {
        self.active.label()
    }

    /// Select by label; labels outside the fixed set are rejected
    pub fn select(&mut self, label: &str) -> Result<(), SheetError> {
        let tab = Tab::from_label(label).ok_or_else(|| SheetError::UnknownTab(label.to_string()))?;
        self.select_tab(tab);
        Ok(())
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active = tab;
        tracing::info!("Tab clicked: {}", tab.label());
    }

    pub fn next(&mut self) {
        self.select_tab(self.active.next());
    }

    pub fn prev(&mut self) {
        self.select_tab(self.active.prev());
    }
}
