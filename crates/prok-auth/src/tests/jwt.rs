use crate::{AuthError, Claims, JwtValidator, TokenIssuer};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn create_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

fn valid_claims() -> Claims {
    Claims {
        sub: Uuid::new_v4().to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    }
}

#[test]
fn given_issued_token_when_validated_then_subject_round_trips() {
    let issuer = TokenIssuer::new(SECRET, 3600);
    let validator = JwtValidator::with_hs256(SECRET);
    let user_id = Uuid::new_v4();

    let token = issuer.issue(user_id).unwrap();
    let claims = validator.validate(&token).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert!(claims.exp > claims.iat);
}

#[test]
fn given_expired_token_when_validated_then_returns_token_expired_error() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = valid_claims();
    claims.exp = chrono::Utc::now().timestamp() - 3600; // Expired 1 hour ago
    let token = create_token(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_wrong_secret_when_validated_then_returns_decode_error() {
    let validator = JwtValidator::with_hs256(b"wrong-secret-key-at-least-32-by");
    let token = create_token(&valid_claims(), SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_garbage_token_when_validated_then_returns_decode_error() {
    let validator = JwtValidator::with_hs256(SECRET);

    let result = validator.validate("not.a.valid.jwt.token");

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_empty_subject_when_validated_then_returns_invalid_claim_error() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = valid_claims();
    claims.sub = String::new();
    let token = create_token(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}
