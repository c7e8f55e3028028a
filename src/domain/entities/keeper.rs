//! Keeper identity and request sessions.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A zookeeper that owns the animals it registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keeper {
    pub id: i64,
    pub name: String,
}

/// A stored keeper credential.
///
/// Only the HMAC digest of the bearer token is kept.
#[derive(Debug, Clone)]
pub struct KeeperToken {
    pub id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl KeeperToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    pub fn keeper(&self) -> Keeper {
        Keeper {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Who is making a request.
///
/// `Anonymous` is the explicit "not authenticated" state: no bearer token was
/// presented. Invalid tokens never become `Anonymous`; they are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Keeper(Keeper),
}

impl Session {
    pub fn keeper(&self) -> Option<&Keeper> {
        match self {
            Session::Anonymous => None,
            Session::Keeper(keeper) => Some(keeper),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.keeper().is_some()
    }
}
