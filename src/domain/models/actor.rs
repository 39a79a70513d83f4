//! Identity passthrough.
//!
//! Authentication happens upstream. The core only carries an already-resolved
//! actor identifier, which may be absent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the actor performing a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    /// Resolve an actor from a raw identifier, taken verbatim. An empty
    /// identifier means "no actor".
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric author id for newly created posts. Only unsigned decimal ids
    /// that fit the store's column map to `Some`.
    pub fn author_id(&self) -> Option<i64> {
        if !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.0.parse::<u64>().ok().and_then(|id| i64::try_from(id).ok())
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-request context handed to every feed operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub actor: Option<ActorId>,
}

impl RequestContext {
    /// Context without a resolved actor.
    pub const fn anonymous() -> Self {
        Self { actor: None }
    }

    pub fn for_actor(actor: impl AsRef<str>) -> Self {
        Self {
            actor: ActorId::parse(actor.as_ref()),
        }
    }

    /// Build from an optional raw header value, as a transport would.
    pub fn from_header(value: Option<&str>) -> Self {
        Self {
            actor: value.and_then(ActorId::parse),
        }
    }

    pub const fn actor(&self) -> Option<&ActorId> {
        self.actor.as_ref()
    }

    /// Author id stamped on posts created in this context, `0` when unknown.
    pub fn author_id(&self) -> i64 {
        self.actor.as_ref().and_then(ActorId::author_id).unwrap_or(0)
    }
}
