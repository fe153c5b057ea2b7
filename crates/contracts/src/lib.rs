//! Wire contracts between the admin console and the REST backend.
//!
//! - `domain`: business records (branches, categories, delivery companies,
//!   suppliers, return requests) with their form bindings
//! - `system`: authentication, users and company settings
//! - `shared`: form conversion helpers and collection envelopes

pub mod domain;
pub mod shared;
pub mod system;
