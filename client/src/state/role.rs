//! Account roles and their login routes.
//!
//! Each role owns one login endpoint and one storage key; nothing else in the
//! client hard-codes either.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage key holding an admin session.
pub const ADMIN_STORAGE_KEY: &str = "adminLoggedIn";
/// Storage key holding a warehouse-manager session.
pub const WAREHOUSE_STORAGE_KEY: &str = "managerLoggedIn";

/// Which kind of account a login is for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Warehouse,
}

impl Role {
    /// Both roles, in rehydration precedence order.
    pub const ALL: [Role; 2] = [Role::Admin, Role::Warehouse];

    /// Value used by the role selector.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Warehouse => "warehouse",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Warehouse => "Warehouse Manager",
        }
    }

    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Admin => ADMIN_STORAGE_KEY,
            Self::Warehouse => WAREHOUSE_STORAGE_KEY,
        }
    }

    fn endpoint_path(self) -> &'static str {
        match self {
            Self::Admin => "/api/Admin/AdminLogin",
            Self::Warehouse => "/api/Warehouse/WarehouseLogin",
        }
    }

    /// The other role.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Admin => Self::Warehouse,
            Self::Warehouse => Self::Admin,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role selector value outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleError {
    #[error("unknown role: {0:?}")]
    Unknown(String),
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "warehouse" => Ok(Self::Warehouse),
            other => Err(RoleError::Unknown(other.to_owned())),
        }
    }
}

/// Where a role logs in and where its session is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleRoute {
    pub endpoint: String,
    pub storage_key: &'static str,
}

/// Resolve the login endpoint and storage key for `role` against `api_base`.
#[must_use]
pub fn resolve(api_base: &str, role: Role) -> RoleRoute {
    RoleRoute {
        endpoint: format!("{}{}", api_base.trim_end_matches('/'), role.endpoint_path()),
        storage_key: role.storage_key(),
    }
}
