use thiserror::Error;

/// State of the contact form for the current submission attempt.
///
/// ```text
/// Idle | Success | Failed --Submit--> Validating
/// Validating --ValidationFailed--> Idle
/// Validating --ValidationPassed--> Submitting
/// Submitting --Succeeded--> Success
/// Submitting --Failed--> Failed
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success {
        message: String,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    ValidationFailed,
    ValidationPassed,
    Succeeded(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot handle {event:?} in state {state:?}")]
pub struct FormTransitionError {
    pub state: FormState,
    pub event: FormEvent,
}

/// Outcome banner shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner<'a> {
    Success(&'a str),
    Error(&'a str),
}

impl FormState {
    pub fn transition(&self, event: FormEvent) -> Result<Self, FormTransitionError> {
        match (self, event) {
            (Self::Idle | Self::Success { .. } | Self::Failed { .. }, FormEvent::Submit) => {
                Ok(Self::Validating)
            }
            (Self::Validating, FormEvent::ValidationFailed) => Ok(Self::Idle),
            (Self::Validating, FormEvent::ValidationPassed) => Ok(Self::Submitting),
            (Self::Submitting, FormEvent::Succeeded(message)) => Ok(Self::Success { message }),
            (Self::Submitting, FormEvent::Failed(message)) => Ok(Self::Failed { message }),
            (state, event) => Err(FormTransitionError {
                state: state.clone(),
                event,
            }),
        }
    }

    pub fn is_submit_enabled(&self) -> bool {
        matches!(
            self,
            Self::Idle | Self::Success { .. } | Self::Failed { .. }
        )
    }

    /// Fields can be edited whenever a submission is not in progress. The last
    /// outcome stays visible while editing.
    pub fn is_editable(&self) -> bool {
        self.is_submit_enabled()
    }

    pub fn banner(&self) -> Option<Banner<'_>> {
        match self {
            Self::Success { message } => Some(Banner::Success(message)),
            Self::Failed { message } => Some(Banner::Error(message)),
            Self::Idle | Self::Validating | Self::Submitting => None,
        }
    }
}
