use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::collections::HashSet;
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, decode_header, encode};

/// The only algorithm tokens may be signed with.
pub const SUPPORTED_ALGORITHM: Algorithm = Algorithm::HS256;

/// Signs claims into compact JWTs and verifies them back.
///
/// The codec enforces algorithm and claim shape only. Expiry and token class
/// are left to [`crate::TokenValidator`].
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Create codec with HS256 (symmetric secret)
    #[track_caller]
    pub fn with_hs256(secret: &[u8]) -> AuthErrorResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::Config {
                message: "signing secret cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut validation = Validation::new(SUPPORTED_ALGORITHM);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    #[track_caller]
    pub fn encode(&self, claims: &Claims) -> AuthErrorResult<String> {
        encode(&Header::new(SUPPORTED_ALGORITHM), claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature and parse claims. Does not look at `exp` or `refresh`.
    #[track_caller]
    pub fn decode(&self, token: &str) -> AuthErrorResult<Claims> {
        Self::check_algorithm(token)?;

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::Signature {
                    message: "signature is invalid".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    AuthError::Signature {
                        message: "unexpected signing method".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                }
                ErrorKind::Json(_) => AuthError::Malformed {
                    message: "invalid token claims".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::Malformed {
                    message: "invalid token".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        Ok(token_data.claims)
    }

    /// Reject anything not signed with HS256 before touching the signature.
    ///
    /// `jsonwebtoken` cannot parse headers naming algorithms it does not know
    /// (`none` among them), so those are read from the raw segment.
    #[track_caller]
    fn check_algorithm(token: &str) -> AuthErrorResult<()> {
        let alg = match decode_header(token) {
            Ok(header) if header.alg == SUPPORTED_ALGORITHM => return Ok(()),
            Ok(header) => format!("{:?}", header.alg),
            Err(_) => match raw_algorithm(token) {
                Some(alg) if alg != "HS256" => alg,
                _ => {
                    return Err(AuthError::Malformed {
                        message: "invalid token".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            },
        };

        Err(AuthError::Signature {
            message: format!("unexpected signing method: {}", alg),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

fn raw_algorithm(token: &str) -> Option<String> {
    let segment = token.split('.').next()?;
    let bytes = URL_SAFE_NO_PAD.decode(segment.trim_end_matches('=')).ok()?;
    let header: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    header.get("alg")?.as_str().map(str::to_owned)
}
