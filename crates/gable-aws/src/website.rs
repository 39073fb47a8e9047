//! The static-website delivery stack
//!
//! One call declares the whole stack on a [`Program`]: a website-configured
//! S3 bucket, its permission rules, a folder sync uploading the built site,
//! a CloudFront distribution terminating TLS at the edge, and a Route 53
//! alias record pointing the derived hostname at the distribution.

use gable_core::config::SiteConfig;
use gable_core::hostname;
use gable_engine::{Output, Program, ResourceSpec};
use tracing::{debug, warn};

use crate::error::Result;
use crate::{acm, cloudfront, provider, route53, s3};

/// Logical name of the website bucket
pub const BUCKET: &str = "bucket";

/// Logical name of the bucket ownership controls
pub const OWNERSHIP_CONTROLS: &str = "ownership-controls";

/// Logical name of the bucket public-access block
pub const PUBLIC_ACCESS_BLOCK: &str = "public-access-block";

/// Logical name of the folder-sync binding
pub const BUCKET_FOLDER: &str = "bucket-folder";

/// Logical name of the region-pinned provider handle
pub const CERTIFICATE_PROVIDER: &str = "us-east-1";

/// Logical name of the hosted-zone lookup
pub const ZONE: &str = "zone";

/// Logical name of the certificate lookup
pub const CERTIFICATE: &str = "certificate";

/// Logical name of the CloudFront distribution
pub const CDN: &str = "cdn";

/// Logical name of the DNS alias record
pub const ALIAS_RECORD: &str = "alias-record";

/// Export: "http://" + bucket website endpoint
pub const EXPORT_ORIGIN_URL: &str = "originURL";

/// Export: raw bucket website endpoint
pub const EXPORT_ORIGIN_HOSTNAME: &str = "originHostname";

/// Export: "https://" + distribution domain name
pub const EXPORT_CDN_URL: &str = "cdnURL";

/// Export: raw distribution domain name
pub const EXPORT_CDN_HOSTNAME: &str = "cdnHostname";

/// Export: "https://" + derived hostname
pub const EXPORT_ALIAS_URL: &str = "aliasURL";

/// Fixed CDN freshness window in seconds. Minimum, default, and maximum are
/// all pinned to it, so origin cache headers have no effect.
pub const CACHE_TTL_SECONDS: u64 = 600;

/// Facts derived while declaring the stack
#[derive(Debug, Clone)]
pub struct StaticSite {
    /// Hostname the site is served at, possibly pull-request scoped
    pub hostname: String,

    /// DNS record name relative to the zone; empty means the apex
    pub record_name: String,

    /// Security-relevant posture notes the operator should read
    pub advisories: Vec<String>,
}

/// Declare the complete website stack on `program`.
///
/// The derived hostname is validated against the zone host before anything
/// is declared; on error the program is left untouched.
pub fn declare(
    program: &mut Program,
    config: &SiteConfig,
    pr_number: Option<&str>,
) -> Result<StaticSite> {
    let host = hostname::derive(&config.frontend_host, pr_number);
    hostname::ensure_within_zone(&host, &config.zone_host)?;
    let record = hostname::record_name(&host, &config.zone_host)?;

    debug!("Declaring website stack for '{host}'");

    let bucket = program.add(ResourceSpec::managed(
        BUCKET,
        s3::TYPE_BUCKET,
        &s3::BucketArgs {
            website: s3::BucketWebsiteArgs {
                index_document: config.index_document.clone(),
                error_document: config.index_document.clone(),
            },
        },
    )?)?;

    let ownership = program.add(ResourceSpec::managed(
        OWNERSHIP_CONTROLS,
        s3::TYPE_BUCKET_OWNERSHIP_CONTROLS,
        &s3::BucketOwnershipControlsArgs {
            bucket: bucket.attr(s3::ATTR_BUCKET),
            rule: s3::OwnershipControlsRule {
                object_ownership: s3::ObjectOwnership::ObjectWriter,
            },
        },
    )?)?;

    let access = program.add(ResourceSpec::managed(
        PUBLIC_ACCESS_BLOCK,
        s3::TYPE_BUCKET_PUBLIC_ACCESS_BLOCK,
        &s3::BucketPublicAccessBlockArgs {
            bucket: bucket.attr(s3::ATTR_BUCKET),
            block_public_acls: false,
        },
    )?)?;

    let acl_advisory = format!(
        "Bucket '{BUCKET}' permits public ACLs and objects are uploaded with a \
         public-read ACL; anyone can fetch the site content directly from the bucket"
    );
    warn!("{acl_advisory}");

    // The upload must not race the permission rules
    program.add(
        ResourceSpec::managed(
            BUCKET_FOLDER,
            s3::TYPE_BUCKET_FOLDER,
            &s3::BucketFolderArgs {
                bucket_name: bucket.attr(s3::ATTR_BUCKET),
                path: config.content_path.clone(),
                acl: s3::CannedAcl::PublicRead,
            },
        )?
        .depends_on(ownership.name())
        .depends_on(access.name()),
    )?;

    let cert_provider = program.add(ResourceSpec::managed(
        CERTIFICATE_PROVIDER,
        provider::TYPE_PROVIDER,
        &provider::ProviderArgs::cloudfront_certificate_region(),
    )?)?;

    let zone = program.add(ResourceSpec::lookup(
        ZONE,
        route53::TYPE_GET_ZONE,
        &route53::GetZoneArgs {
            name: config.zone_host.clone(),
        },
    )?)?;

    let certificate = program.add(
        ResourceSpec::lookup(
            CERTIFICATE,
            acm::TYPE_GET_CERTIFICATE,
            &acm::GetCertificateArgs::issued(config.cert_host.clone()),
        )?
        .with_provider(cert_provider.name()),
    )?;

    let cdn = program.add(ResourceSpec::managed(
        CDN,
        cloudfront::TYPE_DISTRIBUTION,
        &cloudfront::DistributionArgs {
            enabled: true,
            aliases: vec![host.clone()],
            origins: vec![cloudfront::DistributionOrigin {
                origin_id: bucket.attr(s3::ATTR_ARN),
                domain_name: bucket.attr(s3::ATTR_WEBSITE_ENDPOINT),
                custom_origin_config: cloudfront::CustomOriginConfig {
                    origin_protocol_policy: cloudfront::OriginProtocolPolicy::HttpOnly,
                    http_port: 80,
                    https_port: 443,
                    origin_ssl_protocols: vec![cloudfront::SslProtocol::TlsV1_2],
                },
            }],
            default_cache_behavior: cloudfront::DefaultCacheBehavior {
                target_origin_id: bucket.attr(s3::ATTR_ARN),
                viewer_protocol_policy: cloudfront::ViewerProtocolPolicy::RedirectToHttps,
                allowed_methods: cloudfront::HttpMethod::all(),
                cached_methods: cloudfront::HttpMethod::cacheable(),
                min_ttl: CACHE_TTL_SECONDS,
                default_ttl: CACHE_TTL_SECONDS,
                max_ttl: CACHE_TTL_SECONDS,
                forwarded_values: cloudfront::ForwardedValues {
                    query_string: true,
                    cookies: cloudfront::CookiePreference {
                        forward: cloudfront::CookieForward::All,
                    },
                    headers: vec!["Origin".to_string()],
                },
            },
            price_class: cloudfront::PriceClass::Class100,
            restrictions: cloudfront::Restrictions {
                geo_restriction: cloudfront::GeoRestriction {
                    restriction_type: cloudfront::GeoRestrictionType::None,
                },
            },
            viewer_certificate: cloudfront::ViewerCertificate {
                cloudfront_default_certificate: false,
                acm_certificate_arn: certificate.attr(acm::ATTR_ARN),
                ssl_support_method: cloudfront::SslSupportMethod::SniOnly,
            },
        },
    )?)?;

    program.add(ResourceSpec::managed(
        ALIAS_RECORD,
        route53::TYPE_RECORD,
        &route53::RecordArgs {
            name: record.clone(),
            zone_id: zone.attr(route53::ATTR_ZONE_ID),
            record_type: route53::RecordType::A,
            aliases: vec![route53::RecordAlias {
                name: cdn.attr(cloudfront::ATTR_DOMAIN_NAME),
                zone_id: cdn.attr(cloudfront::ATTR_HOSTED_ZONE_ID),
                evaluate_target_health: true,
            }],
        },
    )?)?;

    program.export(
        EXPORT_ORIGIN_URL,
        bucket.attr(s3::ATTR_WEBSITE_ENDPOINT).with_prefix("http://"),
    )?;
    program.export(EXPORT_ORIGIN_HOSTNAME, bucket.attr(s3::ATTR_WEBSITE_ENDPOINT))?;
    program.export(
        EXPORT_CDN_URL,
        cdn.attr(cloudfront::ATTR_DOMAIN_NAME).with_prefix("https://"),
    )?;
    program.export(EXPORT_CDN_HOSTNAME, cdn.attr(cloudfront::ATTR_DOMAIN_NAME))?;
    program.export(
        EXPORT_ALIAS_URL,
        Output::literal(host.clone()).with_prefix("https://"),
    )?;

    Ok(StaticSite {
        hostname: host,
        record_name: record,
        advisories: vec![acl_advisory],
    })
}
