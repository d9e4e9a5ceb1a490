//! Argument validators for clap.

/// Maximum accepted player ID length
pub const MAX_PLAYER_ID_LENGTH: usize = 64;

/// Validate a player ID argument.
///
/// IDs must be non-blank, at most 64 characters, and free of whitespace.
pub fn validate_player_id(s: &str) -> Result<String, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Player ID cannot be empty".to_string());
    }
    if s.len() > MAX_PLAYER_ID_LENGTH {
        return Err(format!(
            "Player ID cannot exceed {MAX_PLAYER_ID_LENGTH} characters"
        ));
    }
    if s.chars().any(char::is_whitespace) {
        return Err("Player ID cannot contain whitespace".to_string());
    }
    Ok(s.to_string())
}
