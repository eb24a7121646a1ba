use serde::{Deserialize, Serialize};

/// An account identity. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Payload for creating an account.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountCreate {
    pub name: String,
}
