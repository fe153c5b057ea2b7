//! Branch create/edit page

mod view;

pub use view::BranchDetails;
