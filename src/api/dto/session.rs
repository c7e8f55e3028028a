//! DTOs for session introspection.

use serde::Serialize;

use crate::domain::entities::{Keeper, Session};

/// Who the service thinks the caller is.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keeper: Option<Keeper>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        match session {
            Session::Anonymous => Self {
                authenticated: false,
                keeper: None,
            },
            Session::Keeper(keeper) => Self {
                authenticated: true,
                keeper: Some(keeper),
            },
        }
    }
}
