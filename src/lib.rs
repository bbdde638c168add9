//! # Soroban Skincare Profile
//!
//! Per-address skincare profiles with owner-only mutation and a privacy
//! mode controlling who may read them.
//!
//! - One profile per address, keyed by the owner
//! - Validated username, skin type and up to five goals
//! - Field-by-field partial updates
//! - Public or private visibility (private by default)
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Create a profile
//! client.create_profile(&username, &skin_type, &goals, &caller);
//!
//! // Open it up to other readers
//! client.set_privacy_mode(&1, &caller);
//!
//! // Read someone's profile
//! let profile = client.get_profile_info(&owner, &requester);
//! ```

#![no_std]

mod events;
mod profile;
mod storage;
mod validation;

pub use profile::{PrivacyMode, Profile, ProfileUpdate};
pub use storage::ProfileKey;
pub use validation::{
    validate_goals, validate_skin_type, validate_username, MAX_GOALS, MAX_GOAL_LENGTH,
    MAX_SKIN_TYPE_LENGTH, MAX_USERNAME_LENGTH,
};

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String, Vec};

use crate::events::*;

/// Error codes for the skincare profile contract.
///
/// Values follow HTTP status semantics and are part of the public contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProfileError {
    /// Empty text field, too many goals, or an unknown privacy mode.
    InvalidInput = 400,
    /// Non-owner read of a private profile.
    Unauthorized = 403,
    /// No profile exists for the address.
    NotFound = 404,
    /// The caller already has a profile.
    AlreadyExists = 409,
}

#[contract]
pub struct SkincareProfileContract;

#[contractimpl]
impl SkincareProfileContract {
    // ========== Lifecycle ==========

    /// Create a profile for `caller`.
    ///
    /// The new profile starts in [`PrivacyMode::Private`].
    ///
    /// # Errors
    /// - `InvalidInput` if the username or skin type is empty or too long, or
    ///   more than five goals are given
    /// - `AlreadyExists` if `caller` already has a profile
    pub fn create_profile(
        env: Env,
        username: String,
        skin_type: String,
        goals: Vec<String>,
        caller: Address,
    ) -> Result<bool, ProfileError> {
        caller.require_auth();

        validation::validate_new_profile(&username, &skin_type, &goals)?;

        if storage::has_profile(&env, &caller) {
            log!(&env, "profile already exists", caller);
            return Err(ProfileError::AlreadyExists);
        }

        let timestamp = env.ledger().sequence() as u64;
        let profile = Profile::new(caller.clone(), username, skin_type, goals, timestamp);

        storage::save_profile(&env, &profile);
        storage::increment_profile_count(&env);

        emit_profile_created(&env, &caller, &profile.username);

        Ok(true)
    }

    /// Replace any subset of the caller's profile fields.
    ///
    /// `None` keeps the current value. Either every provided field is
    /// applied or none is.
    ///
    /// # Errors
    /// - `NotFound` if `caller` has no profile
    /// - `InvalidInput` if any provided field fails validation
    pub fn update_profile(
        env: Env,
        username: Option<String>,
        skin_type: Option<String>,
        goals: Option<Vec<String>>,
        caller: Address,
    ) -> Result<bool, ProfileError> {
        caller.require_auth();

        let mut profile = Self::load_owned(&env, &caller)?;

        let update = ProfileUpdate {
            username,
            skin_type,
            goals,
        };
        validation::validate_update(&update)?;

        if update.is_empty() {
            return Ok(true);
        }

        update.apply_to(&mut profile);
        profile.updated_at = env.ledger().sequence() as u64;
        storage::save_profile(&env, &profile);

        emit_profile_updated(&env, &caller);

        Ok(true)
    }

    /// Set who may read the caller's profile.
    ///
    /// `mode` is `1` for public and `2` for private.
    ///
    /// # Errors
    /// - `InvalidInput` if `mode` is neither
    /// - `NotFound` if `caller` has no profile
    pub fn set_privacy_mode(env: Env, mode: u32, caller: Address) -> Result<bool, ProfileError> {
        caller.require_auth();

        let mode = match PrivacyMode::try_from(mode) {
            Ok(mode) => mode,
            Err(err) => {
                log!(&env, "unknown privacy mode", mode);
                return Err(err);
            }
        };

        let mut profile = Self::load_owned(&env, &caller)?;

        profile.privacy_mode = mode;
        profile.updated_at = env.ledger().sequence() as u64;
        storage::save_profile(&env, &profile);

        emit_privacy_mode_changed(&env, &caller, mode);

        Ok(true)
    }

    /// Remove the caller's profile.
    ///
    /// Nothing is kept behind; the address may create a new profile later.
    ///
    /// # Errors
    /// - `NotFound` if `caller` has no profile
    pub fn delete_profile(env: Env, caller: Address) -> Result<bool, ProfileError> {
        caller.require_auth();

        Self::load_owned(&env, &caller)?;

        storage::remove_profile(&env, &caller);
        storage::decrement_profile_count(&env);

        emit_profile_deleted(&env, &caller);

        Ok(true)
    }

    // ========== Queries ==========

    /// Check whether `target` has a profile. Open to anyone.
    pub fn profile_exists(env: Env, target: Address) -> bool {
        storage::has_profile(&env, &target)
    }

    /// Read `target`'s profile on behalf of `requester`.
    ///
    /// Public profiles are readable by anyone. Private profiles are only
    /// readable by their owner, who must authorize the call.
    ///
    /// # Errors
    /// - `NotFound` if `target` has no profile
    /// - `Unauthorized` if the profile is private and `requester` is not the owner
    pub fn get_profile_info(
        env: Env,
        target: Address,
        requester: Address,
    ) -> Result<Profile, ProfileError> {
        let profile = storage::load_profile(&env, &target).ok_or(ProfileError::NotFound)?;

        if profile.is_public() {
            return Ok(profile);
        }

        if !profile.is_owned_by(&requester) {
            log!(&env, "private profile read denied", target, requester);
            return Err(ProfileError::Unauthorized);
        }

        // Owner access to a private record must not be claimable by anyone else.
        requester.require_auth();

        Ok(profile)
    }

    /// Number of live profiles.
    pub fn profile_count(env: Env) -> u64 {
        storage::profile_count(&env)
    }

    // ========== Internal Helpers ==========

    /// Load the profile keyed by `caller`.
    ///
    /// Storage is keyed by owner, so a caller can only ever reach their own
    /// record; a missing record is the only failure.
    fn load_owned(env: &Env, caller: &Address) -> Result<Profile, ProfileError> {
        storage::load_profile(env, caller).ok_or_else(|| {
            log!(env, "profile not found", caller.clone());
            ProfileError::NotFound
        })
    }
}
