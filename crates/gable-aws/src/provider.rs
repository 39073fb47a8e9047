//! Explicit provider handles

use serde::Serialize;

/// Engine type token for an explicit provider handle
pub const TYPE_PROVIDER: &str = "aws:Provider";

/// Region CloudFront requires viewer certificates to live in, regardless of
/// the deployment's default region
pub const CLOUDFRONT_CERTIFICATE_REGION: &str = "us-east-1";

/// Arguments for a region-pinned provider handle
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderArgs {
    /// AWS region the handle is pinned to
    pub region: String,
}

impl ProviderArgs {
    /// A handle pinned to the CloudFront certificate region
    pub fn cloudfront_certificate_region() -> Self {
        Self {
            region: CLOUDFRONT_CERTIFICATE_REGION.to_string(),
        }
    }
}
