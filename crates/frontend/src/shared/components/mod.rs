pub mod confirm_delete;
pub mod details_scaffold;
pub mod empty_state;
pub mod error_banner;
pub mod list_scaffold;
pub mod notice;
pub mod page_header;
pub mod pagination_controls;
pub mod row_actions;
pub mod status_badge;
pub mod table;
pub mod ui;

pub use confirm_delete::ConfirmDelete;
pub use details_scaffold::DetailsScaffold;
pub use empty_state::EmptyState;
pub use error_banner::ErrorBanner;
pub use list_scaffold::ListScaffold;
pub use notice::{use_notices, NoticeHost, NoticeService};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use row_actions::RowActions;
pub use status_badge::{ActiveBadge, StatusBadge, StatusTone};
