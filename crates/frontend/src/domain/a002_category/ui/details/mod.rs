mod related;
mod view;

pub use view::CategoryDetails;
