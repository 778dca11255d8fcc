use crate::domain::user::UserId;

/// Identity attached to a request after token verification. Minting tokens
/// is the identity service's concern; by the time a service method runs,
/// authentication has already happened.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
}
