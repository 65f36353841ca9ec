use crate::entity::user::User;
use crate::error::authorization_error::AuthorizationError;

/// The stateless policy rules consulted before each mutation. First failing
/// rule wins; reads are gated upstream by the authentication middleware.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Create user, update profile fields.
    pub fn require_admin(actor: &User) -> Result<(), AuthorizationError> {
        if !actor.admin {
            return Err(AuthorizationError::InsufficientPrivilege);
        }
        Ok(())
    }

    /// Delete user, change password.
    pub fn require_self_or_admin(actor: &User, target_id: i64) -> Result<(), AuthorizationError> {
        if actor.id != target_id && !actor.admin {
            return Err(AuthorizationError::InsufficientPrivilege);
        }
        Ok(())
    }

    /// Change admin or active flag: admin required, and never on yourself.
    /// The self case is a distinct error even for admins.
    pub fn require_admin_on_other(actor: &User, target_id: i64) -> Result<(), AuthorizationError> {
        if !actor.admin {
            return Err(AuthorizationError::InsufficientPrivilege);
        }
        if actor.id == target_id {
            return Err(AuthorizationError::SelfPrivilegeChange);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, admin: bool) -> User {
        User {
            id,
            username: format!("user{}", id),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: format!("user{}@example.com", id),
            password_hash: "$2b$12$irrelevant".to_string(),
            active: true,
            admin,
        }
    }

    #[test]
    fn test_require_admin() {
        assert!(AuthorizationService::require_admin(&user(1, true)).is_ok());
        assert!(matches!(
            AuthorizationService::require_admin(&user(1, false)),
            Err(AuthorizationError::InsufficientPrivilege)
        ));
    }

    #[test]
    fn test_require_self_or_admin() {
        // Self, no admin flag needed
        assert!(AuthorizationService::require_self_or_admin(&user(1, false), 1).is_ok());
        // Admin acting on another user
        assert!(AuthorizationService::require_self_or_admin(&user(1, true), 2).is_ok());
        // Plain user acting on another user
        assert!(matches!(
            AuthorizationService::require_self_or_admin(&user(1, false), 2),
            Err(AuthorizationError::InsufficientPrivilege)
        ));
    }

    #[test]
    fn test_require_admin_on_other() {
        assert!(AuthorizationService::require_admin_on_other(&user(1, true), 2).is_ok());
        assert!(matches!(
            AuthorizationService::require_admin_on_other(&user(1, false), 2),
            Err(AuthorizationError::InsufficientPrivilege)
        ));
    }

    #[test]
    fn test_admin_cannot_change_own_privileges() {
        // The admin check passes; the self check still refuses, distinctly.
        assert!(matches!(
            AuthorizationService::require_admin_on_other(&user(1, true), 1),
            Err(AuthorizationError::SelfPrivilegeChange)
        ));
    }

    #[test]
    fn test_non_admin_self_change_reports_missing_privilege_first() {
        assert!(matches!(
            AuthorizationService::require_admin_on_other(&user(1, false), 1),
            Err(AuthorizationError::InsufficientPrivilege)
        ));
    }
}
