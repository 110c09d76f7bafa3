//! Value objects with construction-time checks.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// A textual value did not name any known variant.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Server-assigned identifier of a stored workation. Always positive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "i32", into = "i32")]
pub struct WorkationId(i32);

impl WorkationId {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value <= 0 {
            return Err(TypeConstraintError::NonPositiveId);
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for WorkationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<i32> for WorkationId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkationId> for i32 {
    fn from(id: WorkationId) -> Self {
        id.0
    }
}
