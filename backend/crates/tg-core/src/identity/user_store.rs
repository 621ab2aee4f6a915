use crate::{Result as LookupResult, UserIdentity};

use async_trait::async_trait;

/// Key-value lookup of identities by username.
///
/// Retries and timeouts belong to the implementation. Callers issue a single
/// call per request and treat every non-`NotFound` failure as terminal.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    type User: UserIdentity;

    async fn find_by_username(&self, username: &str) -> LookupResult<Self::User>;
}
