mod view;

pub use view::CompanySettingsPage;
