use serde::{Deserialize, Serialize};
use std::fmt;

use crate::collection::Keyed;
use crate::privilege::{Privilege, PrivilegeSet};

/// The privileges one user holds on one study.
///
/// Roles live in a study's roster and are keyed there by the roleholder's
/// user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Role {
    pub location: String,
    pub user_identifier: String,
    pub user_name: String,
    pub study_identifier: String,
    pub study_name: String,
    pub privileges: PrivilegeSet,
}

impl Role {
    /// Role with no privileges.
    pub fn new(user_identifier: impl Into<String>, study_identifier: impl Into<String>) -> Self {
        Self {
            user_identifier: user_identifier.into(),
            study_identifier: study_identifier.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_privileges(mut self, privileges: PrivilegeSet) -> Self {
        self.privileges = privileges;
        self
    }

    pub fn grant(&mut self, privilege: Privilege) {
        self.privileges.insert(privilege.flag());
    }

    pub fn revoke(&mut self, privilege: Privilege) {
        self.privileges.remove(privilege.flag());
    }

    pub fn grant_all(&mut self) {
        self.privileges = PrivilegeSet::all();
    }

    pub fn revoke_all(&mut self) {
        self.privileges = PrivilegeSet::empty();
    }

    pub fn has(&self, privilege: Privilege) -> bool {
        self.privileges.has(privilege)
    }
}

impl Keyed for Role {
    fn key(&self) -> &str {
        &self.user_identifier
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Role:")?;
        writeln!(f, "  location={}", self.location)?;
        writeln!(f, "  user_identifier={}", self.user_identifier)?;
        writeln!(f, "  user_name={}", self.user_name)?;
        writeln!(f, "  study_identifier={}", self.study_identifier)?;
        writeln!(f, "  study_name={}", self.study_name)?;
        for privilege in Privilege::ALL {
            writeln!(f, "  {}={}", privilege.name(), self.has(privilege))?;
        }
        Ok(())
    }
}
