//! Input validation for profile fields.
//!
//! The same rules apply on creation and to every field provided in an
//! update:
//! - Username: 1-64 bytes
//! - Skin type: 1-64 bytes
//! - Goals: at most 5 entries, each at most 128 bytes

use soroban_sdk::{String, Vec};

use crate::profile::ProfileUpdate;
use crate::ProfileError;

/// Maximum username length in bytes.
pub const MAX_USERNAME_LENGTH: u32 = 64;

/// Maximum skin type length in bytes.
pub const MAX_SKIN_TYPE_LENGTH: u32 = 64;

/// Maximum number of goals on a profile.
pub const MAX_GOALS: u32 = 5;

/// Maximum length of a single goal in bytes.
pub const MAX_GOAL_LENGTH: u32 = 128;

/// Validate a username: non-empty and within the length bound.
///
/// Length is counted in UTF-8 bytes, not characters, so a username of
/// multi-byte characters reaches [`MAX_USERNAME_LENGTH`] sooner.
pub fn validate_username(username: &String) -> Result<(), ProfileError> {
    validate_text(username, MAX_USERNAME_LENGTH)
}

/// Validate a skin type descriptor: non-empty and within the length bound
/// (UTF-8 bytes, as for usernames).
pub fn validate_skin_type(skin_type: &String) -> Result<(), ProfileError> {
    validate_text(skin_type, MAX_SKIN_TYPE_LENGTH)
}

/// Validate a goal list.
///
/// Six or more goals is rejected. Individual goals are only length-checked.
pub fn validate_goals(goals: &Vec<String>) -> Result<(), ProfileError> {
    if goals.len() > MAX_GOALS {
        return Err(ProfileError::InvalidInput);
    }

    for goal in goals.iter() {
        if goal.len() > MAX_GOAL_LENGTH {
            return Err(ProfileError::InvalidInput);
        }
    }

    Ok(())
}

/// Validate all fields of a profile about to be created.
pub fn validate_new_profile(
    username: &String,
    skin_type: &String,
    goals: &Vec<String>,
) -> Result<(), ProfileError> {
    validate_username(username)?;
    validate_skin_type(skin_type)?;
    validate_goals(goals)
}

/// Validate every field present in a patch. Absent fields are not checked.
pub fn validate_update(update: &ProfileUpdate) -> Result<(), ProfileError> {
    if let Some(username) = &update.username {
        validate_username(username)?;
    }
    if let Some(skin_type) = &update.skin_type {
        validate_skin_type(skin_type)?;
    }
    if let Some(goals) = &update.goals {
        validate_goals(goals)?;
    }
    Ok(())
}

#[inline]
fn validate_text(value: &String, max_len: u32) -> Result<(), ProfileError> {
    let len = value.len();
    if len == 0 || len > max_len {
        return Err(ProfileError::InvalidInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{vec, Env};

    fn goals(env: &Env, count: u32) -> Vec<String> {
        let mut goals = Vec::new(env);
        for _ in 0..count {
            goals.push_back(String::from_str(env, "goal"));
        }
        goals
    }

    #[test]
    fn test_valid_inputs() {
        let env = Env::default();

        assert_eq!(validate_username(&String::from_str(&env, "a")), Ok(()));
        assert_eq!(
            validate_username(&String::from_str(&env, "testuser")),
            Ok(())
        );
        assert_eq!(
            validate_skin_type(&String::from_str(&env, "combination")),
            Ok(())
        );
        assert_eq!(validate_goals(&goals(&env, 0)), Ok(()));
        assert_eq!(validate_goals(&goals(&env, 5)), Ok(())); // 5 max
    }

    #[test]
    fn test_invalid_inputs() {
        let env = Env::default();

        // Empty text
        assert_eq!(
            validate_username(&String::from_str(&env, "")),
            Err(ProfileError::InvalidInput)
        );
        assert_eq!(
            validate_skin_type(&String::from_str(&env, "")),
            Err(ProfileError::InvalidInput)
        );

        // Too long
        let long = [b'x'; 65];
        assert_eq!(
            validate_username(&String::from_bytes(&env, &long)),
            Err(ProfileError::InvalidInput)
        );
        assert_eq!(
            validate_skin_type(&String::from_bytes(&env, &long)),
            Err(ProfileError::InvalidInput)
        );

        // Too many goals
        assert_eq!(
            validate_goals(&goals(&env, 6)),
            Err(ProfileError::InvalidInput)
        );

        // 22 three-byte characters is 66 bytes
        let mut wide = [0u8; 66];
        for chunk in wide.chunks_mut(3) {
            chunk.copy_from_slice("\u{20ac}".as_bytes());
        }
        assert_eq!(
            validate_username(&String::from_bytes(&env, &wide)),
            Err(ProfileError::InvalidInput)
        );

        // Oversized goal
        let long_goal = String::from_bytes(&env, &[b'g'; 129]);
        assert_eq!(
            validate_goals(&vec![&env, long_goal]),
            Err(ProfileError::InvalidInput)
        );
    }

    #[test]
    fn test_validate_new_profile() {
        let env = Env::default();
        let oily = String::from_str(&env, "oily");

        assert_eq!(
            validate_new_profile(
                &String::from_str(&env, "testuser"),
                &oily,
                &goals(&env, 2)
            ),
            Ok(())
        );
        assert_eq!(
            validate_new_profile(&String::from_str(&env, ""), &oily, &goals(&env, 1)),
            Err(ProfileError::InvalidInput)
        );
        assert_eq!(
            validate_new_profile(
                &String::from_str(&env, "testuser"),
                &oily,
                &goals(&env, 6)
            ),
            Err(ProfileError::InvalidInput)
        );
    }

    #[test]
    fn test_validate_update_skips_absent_fields() {
        let env = Env::default();

        assert_eq!(validate_update(&ProfileUpdate::default()), Ok(()));

        let only_goals = ProfileUpdate {
            goals: Some(goals(&env, 3)),
            ..Default::default()
        };
        assert_eq!(validate_update(&only_goals), Ok(()));

        let empty_username = ProfileUpdate {
            username: Some(String::from_str(&env, "")),
            skin_type: Some(String::from_str(&env, "dry")),
            goals: None,
        };
        assert_eq!(
            validate_update(&empty_username),
            Err(ProfileError::InvalidInput)
        );
    }
}
