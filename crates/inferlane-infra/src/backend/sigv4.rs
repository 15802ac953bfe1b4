//! AWS Signature Version 4 request signing.
//!
//! SageMaker Runtime only accepts SigV4-signed requests, so the SageMaker
//! backend signs each call with static credentials from the environment.
//! Only the subset needed for JSON POSTs to regional endpoints is covered:
//! header-based signing (no presigned URLs), no chunked payloads.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Static AWS credentials.
///
/// The secret key and session token are never logged or included in
/// `Debug` output.
#[derive(Clone)]
pub struct AwsCredentials {
    access_key_id: String,
    secret_access_key: SecretString,
    session_token: Option<SecretString>,
}

impl AwsCredentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: SecretString) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key,
            session_token: None,
        }
    }

    /// Attach a session token (temporary STS credentials).
    pub fn with_session_token(mut self, token: SecretString) -> Self {
        self.session_token = Some(token);
        self
    }

    /// Read `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and the optional
    /// `AWS_SESSION_TOKEN`. Returns `None` unless both keys are set.
    pub fn from_env() -> Option<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let credentials = Self::new(
            var("AWS_ACCESS_KEY_ID")?,
            SecretString::from(var("AWS_SECRET_ACCESS_KEY")?),
        );
        Some(match var("AWS_SESSION_TOKEN") {
            Some(token) => credentials.with_session_token(SecretString::from(token)),
            None => credentials,
        })
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }
}

impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field("session_token", &self.session_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Headers the caller must add to the outgoing request.
#[derive(Debug, Clone)]
pub(crate) struct SignedHeaders {
    pub authorization: String,
    pub amz_date: String,
    pub security_token: Option<String>,
}

/// Where a request is scoped: region and AWS service name.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SigningScope<'a> {
    pub region: &'a str,
    pub service: &'a str,
}

/// Lowercase hex SHA-256 of a request body.
pub(crate) fn payload_hash(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

/// Sign a request.
///
/// `headers` are extra headers to include in the signature (names are
/// lowercased). `host` and `x-amz-date` are always signed, plus
/// `x-amz-security-token` when the credentials carry one.
pub(crate) fn sign(
    credentials: &AwsCredentials,
    scope: SigningScope<'_>,
    method: &str,
    url: &reqwest::Url,
    headers: &[(&str, &str)],
    payload: &[u8],
    now: DateTime<Utc>,
) -> Result<SignedHeaders, InvalidLength> {
    let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
    let date = now.format("%Y%m%d").to_string();

    let security_token = credentials
        .session_token
        .as_ref()
        .map(|token| token.expose_secret().to_string());

    let mut signed: BTreeMap<String, String> = headers
        .iter()
        .map(|(name, value)| (name.to_ascii_lowercase(), value.trim().to_string()))
        .collect();
    signed.insert("host".to_string(), host_header(url));
    signed.insert("x-amz-date".to_string(), amz_date.clone());
    if let Some(token) = &security_token {
        signed.insert("x-amz-security-token".to_string(), token.clone());
    }

    let canonical_headers: String = signed
        .iter()
        .map(|(name, value)| format!("{name}:{value}\n"))
        .collect();
    let signed_header_names = signed.keys().cloned().collect::<Vec<_>>().join(";");

    let canonical_request = format!(
        "{method}\n{}\n{}\n{canonical_headers}\n{signed_header_names}\n{}",
        canonical_uri(url),
        canonical_query(url),
        payload_hash(payload),
    );

    let credential_scope = format!("{date}/{}/{}/aws4_request", scope.region, scope.service);
    let string_to_sign = format!(
        "{ALGORITHM}\n{amz_date}\n{credential_scope}\n{}",
        payload_hash(canonical_request.as_bytes())
    );

    let secret = format!("AWS4{}", credentials.secret_access_key.expose_secret());
    let k_date = hmac_sha256(secret.as_bytes(), date.as_bytes())?;
    let k_region = hmac_sha256(&k_date, scope.region.as_bytes())?;
    let k_service = hmac_sha256(&k_region, scope.service.as_bytes())?;
    let k_signing = hmac_sha256(&k_service, b"aws4_request")?;
    let signature = hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes())?);

    Ok(SignedHeaders {
        authorization: format!(
            "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={signed_header_names}, Signature={signature}",
            credentials.access_key_id
        ),
        amz_date,
        security_token,
    })
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(key)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// `host[:port]`, matching what the HTTP client sends.
fn host_header(url: &reqwest::Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Each path segment URI-encoded once more (non-S3 services).
fn canonical_uri(url: &reqwest::Url) -> String {
    let path = url.path();
    if path.is_empty() {
        return "/".to_string();
    }
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn canonical_query(url: &reqwest::Url) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            (
                urlencoding::encode(&k).into_owned(),
                urlencoding::encode(&v).into_owned(),
            )
        })
        .collect();
    pairs.sort();
    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}
