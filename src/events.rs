//! Event emission helpers for the skincare profile contract.

use soroban_sdk::{Address, Env, String, Symbol};

use crate::profile::PrivacyMode;

/// Emit an event when a profile is created.
pub fn emit_profile_created(env: &Env, address: &Address, username: &String) {
    let topics = (Symbol::new(env, "profile_created"),);
    env.events().publish(topics, (address.clone(), username.clone()));
}

/// Emit an event when profile fields are replaced.
pub fn emit_profile_updated(env: &Env, address: &Address) {
    let topics = (Symbol::new(env, "profile_updated"),);
    env.events().publish(topics, address.clone());
}

/// Emit an event when a profile's privacy mode is set.
pub fn emit_privacy_mode_changed(env: &Env, address: &Address, mode: PrivacyMode) {
    let topics = (Symbol::new(env, "privacy_mode_changed"),);
    env.events().publish(topics, (address.clone(), mode as u32));
}

/// Emit an event when a profile is deleted.
pub fn emit_profile_deleted(env: &Env, address: &Address) {
    let topics = (Symbol::new(env, "profile_deleted"),);
    env.events().publish(topics, address.clone());
}
