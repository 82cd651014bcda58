//! Activation state machine.
//!
//! The state is recomputed on every scroll sample. Hosts only apply visual
//! changes when [`ActivationState::advance`] reports a [`Transition`].

/// Which heading, if any, is currently active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActivationState {
    /// No heading threshold has been crossed
    #[default]
    Inactive,
    ActiveOn(String),
}

/// A change of active heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub previous: Option<String>,
    pub current: Option<String>,
}

impl ActivationState {
    pub fn active_id(&self) -> Option<&str> {
        match self {
            ActivationState::Inactive => None,
            ActivationState::ActiveOn(id) => Some(id),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ActivationState::ActiveOn(_))
    }

    /// Move to the freshly resolved id.
    ///
    /// Returns `None` when the id is unchanged.
    pub fn advance(&mut self, resolved: Option<&str>) -> Option<Transition> {
        if self.active_id() == resolved {
            return None;
        }

        let next = match resolved {
            Some(id) => ActivationState::ActiveOn(id.to_string()),
            None => ActivationState::Inactive,
        };
        let previous = std::mem::replace(self, next);

        Some(Transition {
            previous: previous.active_id().map(str::to_string),
            current: resolved.map(str::to_string),
        })
    }

    /// Drop back to `Inactive`, returning the id that was active.
    pub fn reset(&mut self) -> Option<String> {
        match std::mem::take(self) {
            ActivationState::Inactive => None,
            ActivationState::ActiveOn(id) => Some(id),
        }
    }
}
