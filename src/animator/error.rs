//! Animator errors.

use crate::dom::NodeId;

use super::session::SessionId;

/// Errors returned when starting or addressing sessions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimatorError {
    #[error("Container {} is already animating", .container.index())]
    AlreadyInitialized { container: NodeId },

    #[error("Element {} is not part of the document", .0.index())]
    NotAnElement(NodeId),

    #[error("Unknown session t{}", .0.get())]
    UnknownSession(SessionId),
}
