use std::env;

use crate::env_or;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: positive_or_default(env_or("JWT_ACCESS_EXPIRY", 0)),
        }
    }
}

const DEFAULT_ACCESS_EXPIRY: i64 = 1800; // 30 minutes

/// Zero, negative and unparsable lifetimes fall back to the default.
fn positive_or_default(seconds: i64) -> i64 {
    if seconds > 0 {
        seconds
    } else {
        DEFAULT_ACCESS_EXPIRY
    }
}
