use thiserror::Error;

use crate::id::ShapeId;

/// Errors surfaced by the fallible session operations.
///
/// Pointer handling itself never fails; stray events degrade to no-ops. Only
/// the write-back paths that are handed an id from outside (drag, gizmo) can
/// miss.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no shape with id {0}")]
    UnknownShape(ShapeId),
}
