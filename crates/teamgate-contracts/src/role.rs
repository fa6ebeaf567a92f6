//! Primary roles.
//!
//! Every person holds exactly one primary role. Elevated access is carried
//! separately by the `is_admin` / `is_superadmin` flags on
//! [`ResolvedUser`](crate::user::ResolvedUser), which can co-occur with any
//! primary role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthzError;

/// A person's primary function within a club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Player,
    Coach,
    Admin,
    Superadmin,
    Parent,
    Observer,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 6] = [
        Role::Player,
        Role::Coach,
        Role::Admin,
        Role::Superadmin,
        Role::Parent,
        Role::Observer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Player => "player",
            Role::Coach => "coach",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
            Role::Parent => "parent",
            Role::Observer => "observer",
        }
    }

    /// True for the two roles that mirror an elevated flag.
    pub fn is_elevated(self) -> bool {
        matches!(self, Role::Admin | Role::Superadmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == value)
            .ok_or_else(|| AuthzError::RoleNotFound {
                value: value.to_string(),
            })
    }
}
