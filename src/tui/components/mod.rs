// Components module - the panels that make up the sheet screen
//
// Top to bottom:
// - Header: breadcrumb, search placeholder, user, New Action
// - Toolbar: inert view and data buttons
// - Grid: column headers, row gutter, cells
// - Tab strip: footer tabs and the "+" button
// - Status bar: mode, cursor cell, latest log line
//
// Overlays (help, toast) render on top of everything.

pub mod grid;
pub mod header;
pub mod help;
pub mod status_bar;
pub mod tab_strip;
pub mod toast;
pub mod toolbar;

pub use toast::Toast;
