//! Tab management
//!
//! - `bar`: strip of open tabs
//! - `page`: wrapper that shows the active tab and hides the rest
//! - `registry`: tab key → page view
//! - `tab_labels`: tab keys and titles

pub mod bar;
pub mod page;
pub mod registry;
pub mod tab_labels;

pub use bar::TabBar;
pub use page::TabPage;
pub use tab_labels::{detail_tab_key, detail_tab_label, tab_label_for_key};
