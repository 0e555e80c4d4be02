// --- File: crates/tutoria_common/src/auth.rs ---
//! Bearer-token verification middleware.
//!
//! Token issuance belongs to the external identity service; this service only
//! verifies signatures against the shared `auth.token_secret`. A token is
//! `base64url(claims_json) . base64url(hmac_sha256(claims_json))`, carrying
//! the `AuthUser` claims. Any request without a valid token is rejected with
//! 401, which the client treats as forced logout.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;
use tracing::debug;
use tutoria_config::AppConfig;

use crate::error::TutoriaError;
use crate::models::{AuthUser, UserRole};

type HmacSha256 = Hmac<Sha256>;

/// The state the auth middleware needs: the AppConfig holding the shared secret.
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<AppConfig>,
}

impl AuthState {
    pub fn new(config: Arc<AppConfig>) -> Arc<Self> {
        Arc::new(Self { config })
    }

    fn token_secret(&self) -> Result<String, TutoriaError> {
        self.config
            .auth
            .as_ref()
            .and_then(|auth| auth.token_secret.clone())
            .ok_or_else(|| {
                TutoriaError::ConfigError("Auth token secret not configured".to_string())
            })
    }
}

fn mac_for(secret: &str, payload: &[u8]) -> Result<HmacSha256, TutoriaError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| TutoriaError::ConfigError(format!("Invalid token secret: {e}")))?;
    mac.update(payload);
    Ok(mac)
}

/// Sign claims into a bearer token. Mirrors what the identity service emits;
/// used by tests and local tooling.
pub fn sign_token(secret: &str, user: &AuthUser) -> Result<String, TutoriaError> {
    let claims = serde_json::to_vec(user)?;
    let mac = mac_for(secret, &claims)?;
    let signature = mac.finalize().into_bytes();
    Ok(format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(&claims),
        URL_SAFE_NO_PAD.encode(signature)
    ))
}

/// Verify a bearer token and return the claims it carries.
pub fn verify_token(secret: &str, token: &str) -> Result<AuthUser, TutoriaError> {
    let (claims_part, signature_part) = token
        .split_once('.')
        .ok_or_else(|| TutoriaError::AuthError("Malformed token".to_string()))?;

    let claims = URL_SAFE_NO_PAD
        .decode(claims_part)
        .map_err(|_| TutoriaError::AuthError("Malformed token".to_string()))?;
    let signature = URL_SAFE_NO_PAD
        .decode(signature_part)
        .map_err(|_| TutoriaError::AuthError("Malformed token".to_string()))?;

    let mac = mac_for(secret, &claims)?;
    // verify_slice is constant-time
    mac.verify_slice(&signature)
        .map_err(|_| TutoriaError::AuthError("Invalid token signature".to_string()))?;

    let user: AuthUser = serde_json::from_slice(&claims)
        .map_err(|_| TutoriaError::AuthError("Invalid token claims".to_string()))?;
    Ok(user)
}

/// Axum middleware to authenticate API requests.
/// Checks the `Authorization: Bearer <token>` header and inserts the verified
/// `AuthUser` into request extensions for downstream handlers.
pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let secret = match auth_state.token_secret() {
        Ok(secret) => secret,
        Err(err) => return err.into_response(),
    };

    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) => match verify_token(&secret, token) {
            Ok(user) => {
                debug!("Authenticated request for user {}", user.user_id);
                req.extensions_mut().insert(user);
                next.run(req).await
            }
            Err(err) => err.into_response(),
        },
        None => TutoriaError::AuthError("Missing bearer token".to_string()).into_response(),
    }
}

/// Guard for role-gated operations.
pub fn require_role(user: &AuthUser, role: UserRole) -> Result<(), TutoriaError> {
    if user.role == role {
        Ok(())
    } else {
        Err(TutoriaError::ForbiddenError(format!(
            "This operation requires a {role} account"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn tutor() -> AuthUser {
        AuthUser {
            user_id: "tutor-1".to_string(),
            role: UserRole::Tutor,
        }
    }

    #[test]
    fn sign_and_verify_round_trip() {
        let token = sign_token(SECRET, &tutor()).unwrap();
        let user = verify_token(SECRET, &token).unwrap();
        assert_eq!(user, tutor());
    }

    #[test]
    fn tampered_claims_are_rejected() {
        let token = sign_token(SECRET, &tutor()).unwrap();
        let (_, signature) = token.split_once('.').unwrap();
        let forged_claims =
            URL_SAFE_NO_PAD.encode(br#"{"user_id":"tutor-1","role":"student"}"#);
        let forged = format!("{forged_claims}.{signature}");
        assert!(matches!(
            verify_token(SECRET, &forged),
            Err(TutoriaError::AuthError(_))
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign_token(SECRET, &tutor()).unwrap();
        assert!(verify_token("other-secret", &token).is_err());
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(verify_token(SECRET, "not-a-token").is_err());
    }

    #[test]
    fn require_role_gates_by_role() {
        assert!(require_role(&tutor(), UserRole::Tutor).is_ok());
        assert!(matches!(
            require_role(&tutor(), UserRole::Student),
            Err(TutoriaError::ForbiddenError(_))
        ));
    }
}
