use crate::config::parameter;
use crate::dto::token_dto::{TokenClaimsDto, TokenReadDto};
use crate::error::token_error::TokenError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

#[derive(Clone)]
pub struct TokenService {
    secret: String,
    token_expiration_minutes: i64,
    refresh_leeway_seconds: u64,
}

pub trait TokenServiceTrait {
    fn new() -> Result<Self, TokenError>
    where
        Self: Sized;
    fn issue(&self, subject_id: i64) -> Result<TokenReadDto, TokenError>;
    fn decode(&self, token: &str) -> Result<TokenClaimsDto, TokenError>;
    fn decode_with_leeway(&self, token: &str) -> Result<TokenClaimsDto, TokenError>;
}

impl TokenService {
    pub fn with_secret(
        secret: &str,
        token_expiration_minutes: i64,
        refresh_leeway_seconds: u64,
    ) -> Result<Self, TokenError> {
        // 256-bit minimum for the HS256 shared secret
        if secret.len() < 32 {
            return Err(TokenError::TokenCreation(format!(
                "JWT secret must be at least 32 bytes (256 bits). Current length: {}",
                secret.len()
            )));
        }

        Ok(Self {
            secret: secret.to_string(),
            token_expiration_minutes,
            refresh_leeway_seconds,
        })
    }

    fn decode_internal(&self, token: &str, leeway: u64) -> Result<TokenClaimsDto, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = leeway;

        decode::<TokenClaimsDto>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
            _ => TokenError::TokenMalformed,
        })
    }
}

impl TokenServiceTrait for TokenService {
    fn new() -> Result<Self, TokenError> {
        let secret = parameter::get("JWT_SECRET");
        let token_expiration_minutes = parameter::get_i64("ACCESS_TOKEN_EXPIRE_MINUTES");
        let refresh_leeway_seconds = parameter::get_u64("REFRESH_TOKEN_LEEWAY_SECONDS");

        Self::with_secret(&secret, token_expiration_minutes, refresh_leeway_seconds)
    }

    fn issue(&self, subject_id: i64) -> Result<TokenReadDto, TokenError> {
        let exp = chrono::Utc::now()
            .checked_add_signed(chrono::Duration::minutes(self.token_expiration_minutes))
            .ok_or_else(|| {
                TokenError::TokenCreation("Token expiration calculation overflow".to_string())
            })?
            .timestamp();

        let claims = TokenClaimsDto {
            sub: Some(subject_id),
            exp,
        };

        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| TokenError::TokenCreation(e.to_string()))?;

        Ok(TokenReadDto {
            access_token,
            token_type: "bearer".to_string(),
        })
    }

    /// Strict decode with zero leeway, so an expired token is rejected the
    /// moment its expiry passes. Everything except expiry maps to
    /// `TokenMalformed`.
    fn decode(&self, token: &str) -> Result<TokenClaimsDto, TokenError> {
        self.decode_internal(token, 0)
    }

    /// Leeway-tolerant decode used only by the refresh flow: a token expired
    /// by at most the configured leeway is still exchangeable.
    fn decode_with_leeway(&self, token: &str) -> Result<TokenClaimsDto, TokenError> {
        self.decode_internal(token, self.refresh_leeway_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";
    const OTHER_SECRET: &str = "fedcba9876543210fedcba9876543210";

    fn service() -> TokenService {
        TokenService::with_secret(SECRET, 30, 300).unwrap()
    }

    /// Issues tokens that expired two minutes ago.
    fn expired_service(leeway_seconds: u64) -> TokenService {
        TokenService::with_secret(SECRET, -2, leeway_seconds).unwrap()
    }

    #[test]
    fn test_short_secret_is_rejected() {
        assert!(TokenService::with_secret("too-short", 30, 300).is_err());
    }

    #[test]
    fn test_issue_decode_round_trip_preserves_subject() {
        let service = service();
        let token = service.issue(42).unwrap();
        assert_eq!(token.token_type, "bearer");

        let claims = service.decode(&token.access_token).unwrap();
        assert_eq!(claims.sub, Some(42));
        assert!(claims.exp > chrono::Utc::now().timestamp());
    }

    #[test]
    fn test_expired_token_fails_strict_decode_but_passes_leeway() {
        let service = expired_service(300);
        let token = service.issue(7).unwrap();

        assert!(matches!(
            service.decode(&token.access_token),
            Err(TokenError::TokenExpired)
        ));

        let claims = service.decode_with_leeway(&token.access_token).unwrap();
        assert_eq!(claims.sub, Some(7));
    }

    #[test]
    fn test_token_expired_beyond_leeway_fails_both_decodes() {
        // Two minutes expired, one minute of leeway
        let service = expired_service(60);
        let token = service.issue(7).unwrap();

        assert!(matches!(
            service.decode(&token.access_token),
            Err(TokenError::TokenExpired)
        ));
        assert!(matches!(
            service.decode_with_leeway(&token.access_token),
            Err(TokenError::TokenExpired)
        ));
    }

    #[test]
    fn test_garbage_is_malformed_not_expired() {
        let service = service();
        assert!(matches!(
            service.decode("not.a.jwt"),
            Err(TokenError::TokenMalformed)
        ));
        assert!(matches!(
            service.decode_with_leeway("not.a.jwt"),
            Err(TokenError::TokenMalformed)
        ));
    }

    #[test]
    fn test_foreign_signature_is_malformed() {
        let service = service();
        let foreign = TokenService::with_secret(OTHER_SECRET, 30, 300).unwrap();
        let token = foreign.issue(42).unwrap();

        assert!(matches!(
            service.decode(&token.access_token),
            Err(TokenError::TokenMalformed)
        ));
    }
}
