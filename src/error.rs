use thiserror::Error;

/// Failures detected at the adapter boundary.
///
/// The navigation core itself never fails; every variant here is raised by
/// [`crate::adapter::Anchor`] or by option parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnchorError {
    /// A collaborator the widget needs was not supplied
    #[error("{0} is not available to this widget")]
    MissingDependency(&'static str),

    /// The content selector matched nothing in the host
    #[error("content target not found: {0}")]
    MissingContentTarget(String),

    /// A navigation action referenced an id the host no longer has
    #[error("no heading with id '{0}'")]
    MissingTargetHeading(String),

    #[error("invalid heading tag '{0}'")]
    InvalidTag(String),
}
