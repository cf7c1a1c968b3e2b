//! Input validation utilities
//!
//! Local shape checks applied before credentials are sent to the API.
//! The backend revalidates everything; these exist to fail fast in forms.

use regex::Regex;
use std::sync::OnceLock;

/// Validate a display name
pub fn validate_nombre(nombre: &str) -> Result<(), String> {
    if nombre.trim().is_empty() {
        return Err("Name is required".to_string());
    }

    if nombre.len() > 100 {
        return Err("Name must be at most 100 characters long".to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_nombre() {
        assert!(validate_nombre("Isaac").is_ok());
        assert!(validate_nombre("").is_err());
        assert!(validate_nombre("   ").is_err());
        assert!(validate_nombre(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("profesor@instituto.es").is_ok());
        assert!(validate_email("a.b+c@dominio.co").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("x@dominio").is_err());
        assert!(validate_email("@dominio.es").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("segura123").is_ok());

        assert_eq!(
            validate_password(""),
            Err("Password is required".to_string())
        );
        assert_eq!(
            validate_password("corta"),
            Err("Password must be at least 8 characters long".to_string())
        );
        assert!(validate_password(&"x".repeat(129)).is_err());
    }
}
