//! Profile record, privacy mode and partial-update patch.

use soroban_sdk::{contracttype, Address, String, Vec};

use crate::ProfileError;

/// Who may read a profile.
///
/// Carried on the wire as a `u32`: `1` is public, `2` is private.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PrivacyMode {
    /// Any requester may read the profile.
    Public = 1,
    /// Only the owner may read the profile.
    Private = 2,
}

impl TryFrom<u32> for PrivacyMode {
    type Error = ProfileError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PrivacyMode::Public),
            2 => Ok(PrivacyMode::Private),
            _ => Err(ProfileError::InvalidInput),
        }
    }
}

/// Skincare profile stored for a single owner.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Owning address. Also the storage key, never changes.
    pub owner: Address,

    /// Display username (non-empty).
    pub username: String,

    /// Free-form skin type descriptor (non-empty).
    pub skin_type: String,

    /// Skincare goals, at most five.
    pub goals: Vec<String>,

    /// Read visibility. New profiles start private.
    pub privacy_mode: PrivacyMode,

    /// Ledger sequence at creation.
    pub created_at: u64,

    /// Ledger sequence of the last change.
    pub updated_at: u64,
}

impl Profile {
    /// Create a new private profile.
    pub fn new(
        owner: Address,
        username: String,
        skin_type: String,
        goals: Vec<String>,
        created_at: u64,
    ) -> Self {
        Self {
            owner,
            username,
            skin_type,
            goals,
            privacy_mode: PrivacyMode::Private,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn is_public(&self) -> bool {
        self.privacy_mode == PrivacyMode::Public
    }

    pub fn is_owned_by(&self, address: &Address) -> bool {
        self.owner == *address
    }
}

/// Field-by-field replacement for an existing profile.
///
/// `None` leaves the current value in place. `Some` of an empty string is a
/// real value and is rejected by validation, not treated as "unset".
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub skin_type: Option<String>,
    pub goals: Option<Vec<String>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.skin_type.is_none() && self.goals.is_none()
    }

    /// Write every provided field into `profile`.
    ///
    /// Callers validate first; this never fails.
    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(username) = self.username {
            profile.username = username;
        }
        if let Some(skin_type) = self.skin_type {
            profile.skin_type = skin_type;
        }
        if let Some(goals) = self.goals {
            profile.goals = goals;
        }
    }
}
