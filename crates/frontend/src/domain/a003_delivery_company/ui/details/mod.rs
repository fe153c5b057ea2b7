mod view;

pub use view::DeliveryCompanyDetails;
