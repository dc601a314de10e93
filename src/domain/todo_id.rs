//! Type-safe todo identifier.
//!
//! [`TodoId`] wraps the integer key assigned by [`super::TodoStore`] so that
//! item identifiers cannot be confused with other integers in handlers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Integer identifier of a todo item.
///
/// Assigned by the store on insert as `max(existing) + 1`, and used as the
/// ordered key of the store map and as the `{id}` path parameter.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// The id handed out when the store is empty.
    pub const FIRST: Self = Self(1);

    /// Creates a `TodoId` from a raw integer.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the id following this one, or `None` on `i64` overflow.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TodoId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<TodoId> for i64 {
    fn from(id: TodoId) -> Self {
        id.0
    }
}
