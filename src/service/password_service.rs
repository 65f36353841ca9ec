use crate::config::parameter;

/// One-way password boundary: bcrypt with the username appended as extra
/// salt, so two users with the same password never share a hash input.
pub struct PasswordService;

impl PasswordService {
    fn cost() -> u32 {
        parameter::get_optional("BCRYPT_COST")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(12)
    }

    pub fn hash_password(username: &str, password: &str) -> Result<String, bcrypt::BcryptError> {
        let salted_password = format!("{}{}", password, username);
        bcrypt::hash(salted_password, Self::cost())
    }

    pub fn verify_password(username: &str, password: &str, password_hash: &str) -> bool {
        let salted_password = format!("{}{}", password, username);
        // Verification errors read as a mismatch rather than surfacing a
        // distinguishable failure to the caller.
        bcrypt::verify(salted_password, password_hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = PasswordService::hash_password("alice", "hunter2hunter2").unwrap();
        assert!(PasswordService::verify_password("alice", "hunter2hunter2", &hash));
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let hash = PasswordService::hash_password("alice", "hunter2hunter2").unwrap();
        assert!(!PasswordService::verify_password("alice", "wrong password", &hash));
    }

    #[test]
    fn test_username_participates_in_the_salt() {
        let hash = PasswordService::hash_password("alice", "hunter2hunter2").unwrap();
        assert!(!PasswordService::verify_password("bob", "hunter2hunter2", &hash));
    }

    #[test]
    fn test_garbage_hash_is_a_mismatch_not_a_panic() {
        assert!(!PasswordService::verify_password(
            "alice",
            "hunter2hunter2",
            "not-a-bcrypt-hash"
        ));
    }
}
