use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from the guest session flow
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Username must be at least 4 characters")]
    UsernameTooShort,
}

/// Username value object for the guest session flow
///
/// # Invariants
/// - Must be at least 4 characters long
/// - Is immutable after construction
///
/// There is deliberately no credential attached: a session is nothing more
/// than a validated display name, and every session is unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Creates a new Username value object
    ///
    /// # Arguments
    /// * `username` - The name to validate
    ///
    /// # Returns
    /// * `Ok(Username)` - If the name is at least 4 characters
    /// * `Err(SessionError)` - Otherwise
    ///
    /// # Example
    /// ```
    /// use courtside_api::domain::session::Username;
    ///
    /// let username = Username::new("jordan").expect("valid username");
    /// assert_eq!(username.as_str(), "jordan");
    /// ```
    pub fn new(username: impl Into<String>) -> Result<Self, SessionError> {
        let username = username.into();
        if username.chars().count() < 4 {
            return Err(SessionError::UsernameTooShort);
        }
        Ok(Username(username))
    }

    /// Returns the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An explicit unauthenticated session: a validated name and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSession {
    username: Username,
}

impl GuestSession {
    /// Opens a guest session for the given name.
    pub fn open(username: impl Into<String>) -> Result<Self, SessionError> {
        Ok(Self {
            username: Username::new(username)?,
        })
    }

    /// Returns the session's username
    pub fn username(&self) -> &str {
        self.username.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_username() {
        assert!(Username::new("jordan").is_ok());
    }

    #[test]
    fn valid_username_minimum_length() {
        assert!(Username::new("kobe").is_ok());
    }

    #[test]
    fn username_too_short() {
        assert_eq!(
            Username::new("kd").unwrap_err(),
            SessionError::UsernameTooShort
        );
    }

    #[test]
    fn username_empty() {
        assert!(Username::new("").is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // four characters, more than four bytes
        assert!(Username::new("žëxî").is_ok());
    }

    #[test]
    fn username_display() {
        let username = Username::new("jordan").unwrap();
        assert_eq!(format!("{}", username), "jordan");
    }

    #[test]
    fn guest_session_exposes_name() {
        let session = GuestSession::open("jordan").expect("valid session");
        assert_eq!(session.username(), "jordan");
    }

    #[test]
    fn guest_session_rejects_short_name() {
        assert!(GuestSession::open("mj").is_err());
    }
}
