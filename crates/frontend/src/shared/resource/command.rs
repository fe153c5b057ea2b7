//! Workflow steps that act on a loaded record without going through its form
//! (`POST /api/returns/{id}/send`, ...).

use contracts::shared::form::FieldError;
use serde::Serialize;

use super::client::Resource;
use super::error::ResourceError;

/// One state transition of a record. [`ResourceController::perform`] checks
/// it against the loaded entity, posts the body and reloads the record.
///
/// [`ResourceController::perform`]: super::controller::ResourceController::perform
pub trait Command<R: Resource> {
    type Body: Serialize;

    /// Short name used in log lines
    fn name(&self) -> &'static str;

    /// Reject the step when the record's current state does not offer it.
    fn check(&self, entity: &R) -> Result<(), ResourceError>;

    fn path(&self, entity: &R) -> String;

    fn body(&self) -> Result<Self::Body, FieldError>;
}
