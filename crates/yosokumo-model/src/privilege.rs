//! The fixed set of study permissions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// One study permission. Numbers are stable and run from 1 to 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Privilege {
    GetStudy = 1,
    DeleteStudy = 2,
    GetRoster = 3,
    PostRoster = 4,
    GetRole = 5,
    PutRole = 6,
    DeleteRole = 7,
    GetPanel = 8,
    GetControl = 9,
    PutControl = 10,
    PostTable = 11,
    GetModel = 12,
    PostModel = 13,
}

impl Privilege {
    /// Every privilege in number order.
    pub const ALL: [Privilege; 13] = [
        Privilege::GetStudy,
        Privilege::DeleteStudy,
        Privilege::GetRoster,
        Privilege::PostRoster,
        Privilege::GetRole,
        Privilege::PutRole,
        Privilege::DeleteRole,
        Privilege::GetPanel,
        Privilege::GetControl,
        Privilege::PutControl,
        Privilege::PostTable,
        Privilege::GetModel,
        Privilege::PostModel,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn from_number(number: u32) -> Result<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize).copied())
            .ok_or(ModelError::InvalidPrivilegeNumber(number))
    }

    pub fn name(self) -> &'static str {
        match self {
            Privilege::GetStudy => "GET_STUDY",
            Privilege::DeleteStudy => "DELETE_STUDY",
            Privilege::GetRoster => "GET_ROSTER",
            Privilege::PostRoster => "POST_ROSTER",
            Privilege::GetRole => "GET_ROLE",
            Privilege::PutRole => "PUT_ROLE",
            Privilege::DeleteRole => "DELETE_ROLE",
            Privilege::GetPanel => "GET_PANEL",
            Privilege::GetControl => "GET_CONTROL",
            Privilege::PutControl => "PUT_CONTROL",
            Privilege::PostTable => "POST_TABLE",
            Privilege::GetModel => "GET_MODEL",
            Privilege::PostModel => "POST_MODEL",
        }
    }

    /// The single-bit set for this privilege (bit `number - 1`).
    pub fn flag(self) -> PrivilegeSet {
        PrivilegeSet::from_bits_retain(1 << (self.number() - 1))
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Privilege {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown privilege: {s}"))
    }
}

bitflags::bitflags! {
    /// Privileges held by one user on one study.
    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[serde(transparent)]
    pub struct PrivilegeSet: u16 {
        const GET_STUDY = 1 << 0;
        const DELETE_STUDY = 1 << 1;
        const GET_ROSTER = 1 << 2;
        const POST_ROSTER = 1 << 3;
        const GET_ROLE = 1 << 4;
        const PUT_ROLE = 1 << 5;
        const DELETE_ROLE = 1 << 6;
        const GET_PANEL = 1 << 7;
        const GET_CONTROL = 1 << 8;
        const PUT_CONTROL = 1 << 9;
        const POST_TABLE = 1 << 10;
        const GET_MODEL = 1 << 11;
        const POST_MODEL = 1 << 12;
    }
}

impl PrivilegeSet {
    pub fn has(&self, privilege: Privilege) -> bool {
        self.contains(privilege.flag())
    }

    /// Granted privileges in number order.
    pub fn privileges(&self) -> impl Iterator<Item = Privilege> {
        let set = *self;
        Privilege::ALL.into_iter().filter(move |p| set.has(*p))
    }
}

impl From<Privilege> for PrivilegeSet {
    fn from(privilege: Privilege) -> Self {
        privilege.flag()
    }
}

impl FromIterator<Privilege> for PrivilegeSet {
    fn from_iter<I: IntoIterator<Item = Privilege>>(iter: I) -> Self {
        iter.into_iter()
            .fold(PrivilegeSet::empty(), |set, p| set | p.flag())
    }
}
