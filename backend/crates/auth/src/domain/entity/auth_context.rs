//! Authenticated caller
//!
//! Produced by token verification and attached to the request
//! extensions by the auth middleware.

use kernel::id::UserId;

use crate::domain::value_object::user_role::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: UserId,
    /// Role as asserted by the token, not re-read from storage
    pub role: UserRole,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
