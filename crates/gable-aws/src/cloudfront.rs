//! CloudFront distribution vocabulary

use gable_engine::Output;
use serde::Serialize;

/// Engine type token for a distribution
pub const TYPE_DISTRIBUTION: &str = "aws:cloudfront:Distribution";

/// Distribution domain name attribute (e.g. "d111.cloudfront.net")
pub const ATTR_DOMAIN_NAME: &str = "domainName";

/// Hosted-zone id attribute used when aliasing DNS records at the CDN
pub const ATTR_HOSTED_ZONE_ID: &str = "hostedZoneId";

/// Arguments for a CloudFront distribution
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionArgs {
    /// Whether the distribution serves traffic
    pub enabled: bool,

    /// Alternate domain names the distribution answers for
    pub aliases: Vec<String>,

    /// Content origins
    pub origins: Vec<DistributionOrigin>,

    /// Cache behavior for requests not matching a dedicated behavior
    pub default_cache_behavior: DefaultCacheBehavior,

    /// Edge-location pricing tier
    pub price_class: PriceClass,

    /// Geographic restrictions
    pub restrictions: Restrictions,

    /// TLS termination configuration
    pub viewer_certificate: ViewerCertificate,
}

/// A single content origin
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionOrigin {
    /// Identifier cache behaviors use to target this origin
    pub origin_id: Output,

    /// Hostname the distribution fetches content from
    pub domain_name: Output,

    /// Connection settings for a non-S3-API origin
    pub custom_origin_config: CustomOriginConfig,
}

/// Connection settings for a custom origin.
///
/// S3 static-website endpoints only speak HTTP, so bucket-backed origins
/// use [`OriginProtocolPolicy::HttpOnly`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOriginConfig {
    pub origin_protocol_policy: OriginProtocolPolicy,
    pub http_port: u16,
    pub https_port: u16,
    pub origin_ssl_protocols: Vec<SslProtocol>,
}

/// How the CDN connects to the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OriginProtocolPolicy {
    HttpOnly,
    HttpsOnly,
    MatchViewer,
}

/// TLS versions offered when connecting to the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SslProtocol {
    #[serde(rename = "SSLv3")]
    SslV3,
    #[serde(rename = "TLSv1")]
    TlsV1,
    #[serde(rename = "TLSv1.1")]
    TlsV1_1,
    #[serde(rename = "TLSv1.2")]
    TlsV1_2,
}

/// Default cache behavior
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultCacheBehavior {
    /// Origin the behavior routes to
    pub target_origin_id: Output,

    /// How viewer-side HTTP is handled
    pub viewer_protocol_policy: ViewerProtocolPolicy,

    /// Methods the distribution forwards
    pub allowed_methods: Vec<HttpMethod>,

    /// Methods whose responses are cached
    pub cached_methods: Vec<HttpMethod>,

    /// Seconds an object stays cached regardless of origin cache headers
    pub min_ttl: u64,
    pub default_ttl: u64,
    pub max_ttl: u64,

    /// What request data reaches the origin
    pub forwarded_values: ForwardedValues,
}

/// Viewer-side protocol handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewerProtocolPolicy {
    AllowAll,
    RedirectToHttps,
    HttpsOnly,
}

/// HTTP methods in the engine's wire spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Head,
    Options,
    Post,
    Delete,
    Put,
    Patch,
}

impl HttpMethod {
    /// Every method the stack forwards to the origin
    pub fn all() -> Vec<Self> {
        vec![
            Self::Get,
            Self::Head,
            Self::Options,
            Self::Post,
            Self::Delete,
            Self::Put,
            Self::Patch,
        ]
    }

    /// The cacheable subset
    pub fn cacheable() -> Vec<Self> {
        vec![Self::Get, Self::Head, Self::Options]
    }
}

/// Request data forwarded to the origin
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardedValues {
    /// Forward query strings
    pub query_string: bool,

    /// Cookie forwarding policy
    pub cookies: CookiePreference,

    /// Headers forwarded verbatim
    pub headers: Vec<String>,
}

/// Cookie forwarding policy
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookiePreference {
    pub forward: CookieForward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CookieForward {
    None,
    All,
    Whitelist,
}

/// Edge-location pricing tiers, cheapest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceClass {
    #[serde(rename = "PriceClass_100")]
    Class100,
    #[serde(rename = "PriceClass_200")]
    Class200,
    #[serde(rename = "PriceClass_All")]
    All,
}

/// Geographic restrictions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restrictions {
    pub geo_restriction: GeoRestriction,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRestriction {
    pub restriction_type: GeoRestrictionType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoRestrictionType {
    None,
    Whitelist,
    Blacklist,
}

/// TLS termination configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerCertificate {
    /// Use the default *.cloudfront.net certificate
    pub cloudfront_default_certificate: bool,

    /// ARN of the attached ACM certificate (must live in us-east-1)
    pub acm_certificate_arn: Output,

    /// How the certificate is served to viewers
    pub ssl_support_method: SslSupportMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SslSupportMethod {
    SniOnly,
    Vip,
}
