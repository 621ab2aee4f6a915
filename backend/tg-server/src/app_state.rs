use tg_auth::{Result as AuthErrorResult, TokenIssuer, TokenSettings, TokenValidator};
use tg_core::UserStore;

use std::sync::Arc;

/// Shared, read-only per-process state handed to every handler.
///
/// Nothing here is mutated after startup, so requests never coordinate.
pub struct AppState<S: UserStore> {
    pub issuer: Arc<TokenIssuer>,
    pub validator: Arc<TokenValidator>,
    pub store: Arc<S>,
}

impl<S: UserStore> AppState<S> {
    pub fn new(settings: &TokenSettings, store: S) -> AuthErrorResult<Self> {
        Ok(Self {
            issuer: Arc::new(TokenIssuer::new(settings)?),
            validator: Arc::new(TokenValidator::new(settings)?),
            store: Arc::new(store),
        })
    }
}

// Manual impl: `S` itself need not be Clone.
impl<S: UserStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            issuer: Arc::clone(&self.issuer),
            validator: Arc::clone(&self.validator),
            store: Arc::clone(&self.store),
        }
    }
}
