//! Shared identity model for the session cookie and role-gated views.
//!
//! This crate owns the wire representation used by both `server` and `client`.
//! The server seals [`SessionRecord`] into the session cookie and returns it
//! from `/api/auth/user`; the client decodes the same shape and checks it
//! against a [`RoleSet`] before rendering protected views.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when building a [`RoleSet`] or parsing a [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleSetError {
    /// A guard must permit at least one role.
    #[error("role set must not be empty")]
    Empty,
    /// The name does not map to a known [`Role`] variant.
    #[error("unknown role: {0}")]
    Unknown(String),
}

/// Role carried by an authenticated session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including the admin dashboard.
    Admin,
    /// May edit content.
    Editor,
    /// Read-only access.
    Viewer,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Editor, Role::Viewer];

    /// Wire name of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleSetError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == name)
            .ok_or_else(|| RoleSetError::Unknown(raw.trim().to_owned()))
    }
}

/// Non-empty set of roles permitted through an access guard.
///
/// Built once when a guard is declared; the set cannot be emptied afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    /// Build a set from the given roles.
    ///
    /// # Errors
    ///
    /// Returns [`RoleSetError::Empty`] if no roles are supplied.
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Result<Self, RoleSetError> {
        let roles: BTreeSet<Role> = roles.into_iter().collect();
        if roles.is_empty() {
            return Err(RoleSetError::Empty);
        }
        Ok(Self(roles))
    }

    /// A set permitting exactly one role.
    #[must_use]
    pub fn only(role: Role) -> Self {
        Self(BTreeSet::from([role]))
    }

    /// Add one more permitted role.
    #[must_use]
    pub fn with(mut self, role: Role) -> Self {
        self.0.insert(role);
        self
    }

    /// Parse a comma-separated list such as `"admin, editor"`.
    ///
    /// # Errors
    ///
    /// Returns [`RoleSetError::Unknown`] for an unrecognised name and
    /// [`RoleSetError::Empty`] if the list names no roles.
    pub fn parse(list: &str) -> Result<Self, RoleSetError> {
        let roles = list
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Role::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(roles)
    }

    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Whether the record is authenticated with a role in this set.
    #[must_use]
    pub fn permits(&self, record: &SessionRecord) -> bool {
        record.is_authenticated() && record.role.is_some_and(|role| self.contains(role))
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}

/// Authenticated identity sealed inside the session cookie.
///
/// The default value is the logged-out record and serializes to
/// `{"isLoggedIn":false}`. Identity fields are only meaningful when
/// `is_logged_in` is set; use [`SessionRecord::normalized`] on anything read
/// from the outside to collapse partial records to the default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Discriminant: `false` means "no session".
    #[serde(default)]
    pub is_logged_in: bool,
    /// Stable user identifier issued by the login service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Login email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role used by access guards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl SessionRecord {
    /// Build an authenticated record.
    #[must_use]
    pub fn logged_in(user_id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self { is_logged_in: true, user_id: Some(user_id.into()), email: Some(email.into()), role: Some(role) }
    }

    /// True when the record is logged in and carries a complete identity.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_logged_in
            && self.user_id.as_deref().is_some_and(|id| !id.is_empty())
            && self.email.as_deref().is_some_and(|email| !email.is_empty())
            && self.role.is_some()
    }

    /// Collapse anything short of a complete authenticated record to the default.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.is_authenticated() { self } else { Self::default() }
    }
}

/// A post listed by `GET /api/posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    /// Markdown body.
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication timestamp as written in the posts file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
