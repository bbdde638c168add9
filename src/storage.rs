//! Storage keys and accessors for profile records.

use soroban_sdk::{contracttype, Address, Env};

use crate::profile::Profile;

/// Storage keys for the skincare profile contract.
#[contracttype]
#[derive(Clone, Debug)]
pub enum ProfileKey {
    /// Number of live profiles (instance storage).
    ProfileCount,

    /// Maps owner Address to Profile.
    /// Primary storage for profile data.
    Profile(Address),
}

/// Time-to-live for profile data in ledger entries.
pub const PROFILE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const PROFILE_TTL_EXTEND: u32 = 2592000; // ~150 days

pub fn has_profile(env: &Env, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&ProfileKey::Profile(owner.clone()))
}

pub fn load_profile(env: &Env, owner: &Address) -> Option<Profile> {
    env.storage()
        .persistent()
        .get(&ProfileKey::Profile(owner.clone()))
}

/// Write a profile under its owner and extend the entry's TTL.
pub fn save_profile(env: &Env, profile: &Profile) {
    let key = ProfileKey::Profile(profile.owner.clone());
    env.storage().persistent().set(&key, profile);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
}

pub fn remove_profile(env: &Env, owner: &Address) {
    env.storage()
        .persistent()
        .remove(&ProfileKey::Profile(owner.clone()));
}

pub fn profile_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&ProfileKey::ProfileCount)
        .unwrap_or(0)
}

fn set_profile_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set(&ProfileKey::ProfileCount, &count);
}

pub fn increment_profile_count(env: &Env) {
    set_profile_count(env, profile_count(env).saturating_add(1));
}

pub fn decrement_profile_count(env: &Env) {
    set_profile_count(env, profile_count(env).saturating_sub(1));
}
