//! ACM certificate lookup vocabulary

use serde::Serialize;

/// Engine type token for the certificate lookup
pub const TYPE_GET_CERTIFICATE: &str = "aws:acm:getCertificate";

/// Certificate ARN attribute
pub const ATTR_ARN: &str = "arn";

/// Certificate lifecycle states usable as a lookup filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateStatus {
    PendingValidation,
    Issued,
    Inactive,
    Expired,
    ValidationTimedOut,
    Revoked,
    Failed,
}

/// Arguments for looking up an issued certificate by domain
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCertificateArgs {
    /// Domain the certificate was issued for
    pub domain: String,

    /// Acceptable lifecycle states
    pub statuses: Vec<CertificateStatus>,

    /// Pick the most recently issued match when several qualify
    pub most_recent: bool,
}

impl GetCertificateArgs {
    /// The stack's lookup: issued certificates only, newest first
    pub fn issued(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            statuses: vec![CertificateStatus::Issued],
            most_recent: true,
        }
    }
}
