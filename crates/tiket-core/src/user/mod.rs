//! User domain model and mutation payloads.

pub mod model;

pub use model::{NewUser, ProfileUpdate, Role, User, UserUpdate, validate_password_change};

#[cfg(test)]
mod tests {
    #[test]
    fn test_validation_helpers_are_reachable_from_module_root() {
        assert!(crate::user::validate_password_change("abcdef", "abcdef").is_ok());
    }
}
