use serde::{Deserialize, Serialize};
use std::fmt;

use crate::collection::KeyedCollection;
use crate::role::Role;

/// Every role on one study, keyed by the roleholder's user identifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Roster {
    pub study_identifier: String,
    pub study_name: String,
    pub roster_location: String,
    #[serde(default)]
    pub roles: KeyedCollection<Role>,
}

impl Roster {
    pub fn new(study_identifier: impl Into<String>, study_name: impl Into<String>) -> Self {
        Self {
            study_identifier: study_identifier.into(),
            study_name: study_name.into(),
            ..Self::default()
        }
    }

    /// True if the roleholder had no role in the roster yet.
    pub fn add_role(&mut self, role: Role) -> bool {
        self.roles.upsert(role)
    }

    pub fn add_role_capturing(&mut self, role: Role) -> Option<Role> {
        self.roles.upsert_capturing(role)
    }

    pub fn remove_role(&mut self, user_identifier: &str) -> bool {
        self.roles.remove(user_identifier)
    }

    pub fn role(&self, user_identifier: &str) -> Option<&Role> {
        self.roles.get(user_identifier)
    }

    pub fn contains_role(&self, user_identifier: &str) -> bool {
        self.roles.contains(user_identifier)
    }

    pub fn clear_roles(&mut self) {
        self.roles.clear();
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Roster:")?;
        writeln!(f, "  study_identifier={}", self.study_identifier)?;
        writeln!(f, "  study_name={}", self.study_name)?;
        writeln!(f, "  roster_location={}", self.roster_location)?;
        writeln!(f, "  roles={}", self.roles.len())?;
        for (key, role) in &self.roles {
            writeln!(f, "    {key}  {}", role.user_name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::privilege::Privilege;

    fn role(user: &str, name: &str) -> Role {
        let mut role = Role::new(user, "S1");
        role.user_name = name.to_string();
        role
    }

    #[test]
    fn add_and_capture() {
        let mut roster = Roster::new("S1", "Churn");
        assert!(roster.add_role(role("U2", "Grace")));
        assert!(roster.add_role(role("U1", "Ada")));
        assert_eq!(roster.len(), 2);

        let mut upgraded = role("U1", "Ada");
        upgraded.grant(Privilege::PutRole);
        let old = roster.add_role_capturing(upgraded);
        assert_eq!(old, Some(role("U1", "Ada")));
        assert_eq!(roster.len(), 2);
        assert!(roster.role("U1").is_some_and(|r| r.has(Privilege::PutRole)));

        assert!(roster.remove_role("U2"));
        assert!(!roster.remove_role("U2"));
        assert!(roster.contains_role("U1"));
        roster.clear_roles();
        assert!(roster.is_empty());
    }

    #[test]
    fn display() {
        let mut roster = Roster::new("S1", "Churn");
        roster.add_role(role("U2", "Grace"));
        roster.add_role(role("U1", "Ada"));
        insta::assert_snapshot!(roster.to_string(), @r"
        Roster:
          study_identifier=S1
          study_name=Churn
          roster_location=
          roles=2
            U1  Ada
            U2  Grace
        ");
    }
}
