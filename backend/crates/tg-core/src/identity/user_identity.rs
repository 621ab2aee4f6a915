/// Capability exposed by whatever record backs an authenticated user.
///
/// The token core only ever reads identities; it never creates or mutates them.
pub trait UserIdentity: Clone + Send + Sync + 'static {
    /// Username the identity is addressed by (the `username` token claim).
    fn username(&self) -> &str;

    /// Compare a candidate password against the stored credential.
    fn check_password(&self, candidate: &str) -> bool;
}
