pub mod claims;
pub mod error;
pub mod token_class;
pub mod token_codec;
pub mod token_issuer;
pub mod token_pair;
pub mod token_settings;
pub mod token_validator;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use token_class::TokenClass;
pub use token_codec::TokenCodec;
pub use token_issuer::TokenIssuer;
pub use token_pair::TokenPair;
pub use token_settings::{
    DEFAULT_ACCESS_EXPIRATION, DEFAULT_REFRESH_EXPIRATION, MIN_TOKEN_TTL, TokenSettings,
};
pub use token_validator::TokenValidator;

#[cfg(test)]
mod tests;
