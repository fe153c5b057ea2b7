mod history;
mod items;
mod lines;
mod view;
mod workflow;

pub use view::ReturnDetails;
