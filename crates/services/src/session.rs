//! Mock sign-in. Picks a fixed identity per provider and a view role from
//! the email domain, then signs it into a JWT. There is no credential check;
//! the role selects what the dashboard shows and is not an access control.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kanvas_config::{JwtSettings, SessionSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Token expired")]
    TokenExpired,
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Designer,
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignInProvider {
    Google,
    Github,
    Email,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub image: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssuedSession {
    pub access_token: String,
    pub expires_in: u64,
    pub user: SessionUser,
}

pub struct SessionService {
    jwt_settings: JwtSettings,
    designer_domains: Vec<String>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionService {
    pub fn new(jwt_settings: JwtSettings, session_settings: SessionSettings) -> Self {
        let encoding_key = EncodingKey::from_secret(jwt_settings.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(jwt_settings.secret.as_bytes());
        let designer_domains = session_settings
            .designer_domains
            .into_iter()
            .map(|d| d.trim().trim_start_matches('@').to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        Self {
            jwt_settings,
            designer_domains,
            encoding_key,
            decoding_key,
        }
    }

    /// Designer when the address is on one of the designer domains (or a
    /// subdomain of one), client otherwise.
    pub fn role_for_email(&self, email: &str) -> Role {
        let Some((_, domain)) = email.trim().rsplit_once('@') else {
            return Role::Client;
        };
        let domain = domain.to_ascii_lowercase();
        let on_designer_domain = self.designer_domains.iter().any(|d| {
            domain == *d
                || domain
                    .strip_suffix(d.as_str())
                    .is_some_and(|rest| rest.ends_with('.'))
        });
        if on_designer_domain {
            Role::Designer
        } else {
            Role::Client
        }
    }

    pub fn resolve_user(&self, provider: SignInProvider, email: Option<&str>) -> SessionUser {
        let email = email.map(str::trim).filter(|e| !e.is_empty());
        match (provider, email) {
            (SignInProvider::Google, _) => fixed_user(
                "google-user-1",
                "Alex Johnson",
                "alex@kingdomkanvas.com",
                "Alex",
                Role::Designer,
            ),
            (SignInProvider::Github, _) => fixed_user(
                "github-user-1",
                "Mike Ross",
                "mike@kingdomkanvas.com",
                "Mike",
                Role::Designer,
            ),
            (SignInProvider::Email, Some(email)) => match self.role_for_email(email) {
                Role::Designer => SessionUser {
                    id: "email-user-1".to_string(),
                    name: email.split('@').next().unwrap_or(email).to_string(),
                    email: email.to_string(),
                    image: format!("{AVATAR_BASE}{email}"),
                    role: Role::Designer,
                },
                Role::Client => SessionUser {
                    id: "email-user-2".to_string(),
                    name: "Partner User".to_string(),
                    email: email.to_string(),
                    image: format!("{AVATAR_BASE}{email}"),
                    role: Role::Client,
                },
            },
            _ => fixed_user(
                "fallback-user",
                "Guest",
                "guest@example.com",
                "Guest",
                Role::Client,
            ),
        }
    }

    pub fn sign_in(
        &self,
        provider: SignInProvider,
        email: Option<&str>,
    ) -> Result<IssuedSession, SessionError> {
        let user = self.resolve_user(provider, email);
        let now = Utc::now();
        let ttl = self.jwt_settings.access_token_ttl_secs;
        let expires_at = i64::try_from(ttl)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| SessionError::Encoding(format!("token ttl out of range: {ttl}s")))?;

        let claims = Claims {
            sub: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            image: user.image.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.jwt_settings.issuer.clone(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| SessionError::Encoding(e.to_string()))?;

        Ok(IssuedSession {
            access_token,
            expires_in: ttl,
            user,
        })
    }

    pub fn verify(&self, token: &str) -> Result<SessionUser, SessionError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.jwt_settings.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::TokenExpired,
                _ => SessionError::InvalidToken(e.to_string()),
            })?;

        let claims = token_data.claims;
        Ok(SessionUser {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            image: claims.image,
            role: claims.role,
        })
    }
}

fn fixed_user(id: &str, name: &str, email: &str, seed: &str, role: Role) -> SessionUser {
    SessionUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        image: format!("{AVATAR_BASE}{seed}"),
        role,
    }
}
