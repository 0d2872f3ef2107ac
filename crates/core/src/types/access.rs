//! Capability actions, admin roles, and the authorization seam.
//!
//! Authorization in the admin panel is a capability query of the form
//! "can this role perform this action on this resource type". The view layer
//! only ever asks the question; answering it is the host application's job,
//! expressed through the [`Ability`] trait.

use serde::{Deserialize, Serialize};

/// An action a role may perform on a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Full administrative control, including visibility of admin UI.
    Admin,
    Read,
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Read => write!(f, "read"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "read" => Ok(Self::Read),
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            _ => Err(format!("invalid action: {s}")),
        }
    }
}

/// Admin role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full access to all admin features including user management.
    SuperAdmin,
    /// Full access to store management features.
    Admin,
    /// Read-only access to store data.
    Viewer,
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "super_admin"),
            Self::Admin => write!(f, "admin"),
            Self::Viewer => write!(f, "viewer"),
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "viewer" => Ok(Self::Viewer),
            _ => Err(format!("invalid admin role: {s}")),
        }
    }
}

/// The authorization capability check.
///
/// Implementors decide whether `action` is permitted on the resource type
/// named by `resource`. The navigation layer consults this to suppress
/// elements the current user may not see.
pub trait Ability {
    /// Returns `true` if `action` is permitted on `resource`.
    fn can(&self, action: Action, resource: &str) -> bool;
}

/// Default policy for the built-in roles.
///
/// `SuperAdmin` and `Admin` can do everything; `Viewer` is read-only.
/// Host applications with finer-grained policies implement [`Ability`] on
/// their own type instead.
impl Ability for AdminRole {
    fn can(&self, action: Action, _resource: &str) -> bool {
        match self {
            Self::SuperAdmin | Self::Admin => true,
            Self::Viewer => action == Action::Read,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        for role in [AdminRole::SuperAdmin, AdminRole::Admin, AdminRole::Viewer] {
            assert_eq!(AdminRole::from_str(&role.to_string()).unwrap(), role);
        }
        assert!(AdminRole::from_str("root").is_err());
    }

    #[test]
    fn test_action_round_trip() {
        for action in [
            Action::Admin,
            Action::Read,
            Action::Create,
            Action::Update,
            Action::Delete,
        ] {
            assert_eq!(Action::from_str(&action.to_string()).unwrap(), action);
        }
    }

    #[test]
    fn test_default_policy() {
        assert!(AdminRole::SuperAdmin.can(Action::Admin, "admin_users"));
        assert!(AdminRole::Admin.can(Action::Delete, "products"));
        assert!(AdminRole::Viewer.can(Action::Read, "orders"));
        assert!(!AdminRole::Viewer.can(Action::Admin, "orders"));
        assert!(!AdminRole::Viewer.can(Action::Update, "orders"));
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&AdminRole::SuperAdmin).unwrap(),
            "\"super_admin\""
        );
        assert_eq!(serde_json::to_string(&Action::Admin).unwrap(), "\"admin\"");
    }
}
