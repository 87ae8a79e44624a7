use crate::error::AppError;
use crate::harness::selection::PostSelector;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ScenarioError {
    /// The account fixture has no post in the state the scenario needs.
    Precondition { selector: PostSelector },
    /// The service answered, but not with the expected post-condition.
    Assertion {
        scenario: &'static str,
        message: String,
    },
    /// The remote call itself failed.
    Remote(AppError),
}

impl ScenarioError {
    pub(crate) fn assertion(scenario: &'static str, message: impl Into<String>) -> Self {
        ScenarioError::Assertion {
            scenario,
            message: message.into(),
        }
    }
}

impl Display for ScenarioError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Precondition { selector } => {
                write!(f, "precondition failed: no post matches {selector}")
            }
            ScenarioError::Assertion { scenario, message } => {
                write!(f, "assertion failed in {scenario}: {message}")
            }
            ScenarioError::Remote(e) => write!(f, "remote error: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<AppError> for ScenarioError {
    fn from(e: AppError) -> Self {
        ScenarioError::Remote(e)
    }
}

/// Checks an expected/actual pair, failing with `message` when they differ.
pub(crate) fn ensure_eq<T: PartialEq + fmt::Debug>(
    scenario: &'static str,
    message: &str,
    expected: T,
    actual: T,
) -> Result<(), ScenarioError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ScenarioError::assertion(
            scenario,
            format!("{message}: expected {expected:?}, got {actual:?}"),
        ))
    }
}

/// Result of one scenario execution.
#[derive(Debug)]
pub struct ScenarioReport {
    pub name: String,
    pub outcome: Result<(), ScenarioError>,
}

impl ScenarioReport {
    pub fn new(name: impl Into<String>, outcome: Result<(), ScenarioError>) -> Self {
        Self {
            name: name.into(),
            outcome,
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl Display for ScenarioReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(()) => write!(f, "{}: ok", self.name),
            Err(e) => write!(f, "{}: FAILED ({e})", self.name),
        }
    }
}
