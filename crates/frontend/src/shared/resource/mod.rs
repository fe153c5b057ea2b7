//! Generic CRUD plumbing shared by every admin page.
//!
//! A page declares its record type as a [`Resource`] and gets load, submit,
//! list and delete behaviour from [`ResourceController`] / [`ListController`].

pub mod client;
pub mod command;
pub mod controller;
pub mod error;
pub mod list;
pub mod session;
pub mod state;
pub mod transport;
pub mod view_model;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{ApiClient, Resource};
pub use command::Command;
pub use controller::ResourceController;
pub use error::ResourceError;
pub use list::ListController;
pub use session::SessionListener;
pub use state::{EmptyView, ListState, Phase, ResourceState, StateStore};
pub use view_model::{DetailsViewModel, ListViewModel};
