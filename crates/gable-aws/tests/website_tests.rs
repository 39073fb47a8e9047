//! Integration tests for the website stack declaration

use camino::Utf8PathBuf;
use gable_aws::{acm, cloudfront, route53, s3, website};
use gable_core::config::SiteConfig;
use gable_core::Error as CoreError;
use gable_engine::{Output, Program, ResourceMode, StackState};

fn site(frontend_host: &str, zone_host: &str) -> SiteConfig {
    SiteConfig {
        content_path: Utf8PathBuf::from("../frontend/dist"),
        index_document: "index.html".to_string(),
        frontend_host: frontend_host.to_string(),
        zone_host: zone_host.to_string(),
        cert_host: zone_host.to_string(),
    }
}

fn declare(config: &SiteConfig, pr: Option<&str>) -> (Program, website::StaticSite) {
    let mut program = Program::new("test-stack");
    let stack = website::declare(&mut program, config, pr).expect("declaration should succeed");
    (program, stack)
}

#[test]
fn test_declares_resources_in_documented_order() {
    let (program, _) = declare(&site("www.example.com", "example.com"), None);

    let names: Vec<&str> = program.resources().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            website::BUCKET,
            website::OWNERSHIP_CONTROLS,
            website::PUBLIC_ACCESS_BLOCK,
            website::BUCKET_FOLDER,
            website::CERTIFICATE_PROVIDER,
            website::ZONE,
            website::CERTIFICATE,
            website::CDN,
            website::ALIAS_RECORD,
        ]
    );

    // Lookups read the environment; everything else is managed
    for spec in program.resources() {
        let expected = if spec.name == website::ZONE || spec.name == website::CERTIFICATE {
            ResourceMode::Lookup
        } else {
            ResourceMode::Managed
        };
        assert_eq!(spec.mode, expected, "unexpected mode for '{}'", spec.name);
    }
}

#[test]
fn test_execution_order_matches_declaration_order() {
    let (program, _) = declare(&site("www.example.com", "example.com"), None);
    program.validate().expect("program should validate");

    let execution: Vec<&str> = program
        .execution_order()
        .unwrap()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    let declaration: Vec<&str> = program.resources().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(execution, declaration);
}

#[test]
fn test_zone_mismatch_declares_nothing() {
    let mut program = Program::new("test-stack");
    let err = website::declare(&mut program, &site("example.com", "other.com"), None)
        .expect_err("declaration should fail");

    assert!(
        matches!(
            err,
            gable_aws::Error::Config(CoreError::InvalidConfiguration { .. })
        ),
        "Expected InvalidConfiguration, got: {:?}",
        err
    );
    assert!(program.resources().is_empty(), "no resource may be declared");
    assert!(program.exports().is_empty(), "no export may be registered");
}

#[test]
fn test_pr_scoped_frontend_host_passes_validation() {
    let (program, stack) = declare(&site("pr-42.example.com", "example.com"), None);
    assert_eq!(stack.record_name, "pr-42");

    let record = program.get(website::ALIAS_RECORD).unwrap();
    assert_eq!(record.args["name"], serde_json::json!("pr-42"));
}

#[test]
fn test_pr_number_scopes_hostname_and_record() {
    let (program, stack) = declare(&site("www.example.com", "example.com"), Some("7"));
    assert_eq!(stack.hostname, "pr-7.www.example.com");
    assert_eq!(stack.record_name, "pr-7.www");

    let cdn = program.get(website::CDN).unwrap();
    assert_eq!(
        cdn.args["aliases"],
        serde_json::json!(["pr-7.www.example.com"])
    );
}

#[test]
fn test_empty_pr_number_behaves_like_none() {
    let (_, stack) = declare(&site("www.example.com", "example.com"), Some(""));
    assert_eq!(stack.hostname, "www.example.com");
}

#[test]
fn test_apex_site_record_name_is_empty() {
    let (program, stack) = declare(&site("example.com", "example.com"), None);
    assert_eq!(stack.record_name, "");

    let record = program.get(website::ALIAS_RECORD).unwrap();
    assert_eq!(record.args["name"], serde_json::json!(""));
}

#[test]
fn test_folder_sync_waits_for_permission_rules() {
    let (program, _) = declare(&site("www.example.com", "example.com"), None);

    let folder = program.get(website::BUCKET_FOLDER).unwrap();
    assert_eq!(
        folder.depends_on,
        vec![website::OWNERSHIP_CONTROLS, website::PUBLIC_ACCESS_BLOCK]
    );
    assert_eq!(folder.args["acl"], serde_json::json!("public-read"));
    assert_eq!(folder.args["path"], serde_json::json!("../frontend/dist"));
}

#[test]
fn test_bucket_serves_index_document_for_errors() {
    let (program, _) = declare(&site("www.example.com", "example.com"), None);

    let bucket = program.get(website::BUCKET).unwrap();
    assert_eq!(bucket.resource_type, s3::TYPE_BUCKET);
    assert_eq!(
        bucket.args["website"],
        serde_json::json!({
            "indexDocument": "index.html",
            "errorDocument": "index.html"
        })
    );
}

#[test]
fn test_public_acl_posture_is_declared_and_flagged() {
    let (program, stack) = declare(&site("www.example.com", "example.com"), None);

    let access = program.get(website::PUBLIC_ACCESS_BLOCK).unwrap();
    assert_eq!(access.args["blockPublicAcls"], serde_json::json!(false));

    let ownership = program.get(website::OWNERSHIP_CONTROLS).unwrap();
    assert_eq!(
        ownership.args["rule"]["objectOwnership"],
        serde_json::json!("ObjectWriter")
    );

    assert!(
        stack.advisories.iter().any(|a| a.contains("public")),
        "the open-bucket posture must be surfaced, got: {:?}",
        stack.advisories
    );
}

#[test]
fn test_certificate_lookup_uses_pinned_region_provider() {
    let (program, _) = declare(&site("www.example.com", "example.com"), None);

    let provider = program.get(website::CERTIFICATE_PROVIDER).unwrap();
    assert_eq!(provider.args["region"], serde_json::json!("us-east-1"));

    let certificate = program.get(website::CERTIFICATE).unwrap();
    assert_eq!(certificate.resource_type, acm::TYPE_GET_CERTIFICATE);
    assert_eq!(
        certificate.provider.as_deref(),
        Some(website::CERTIFICATE_PROVIDER)
    );
    assert_eq!(certificate.args["domain"], serde_json::json!("example.com"));
    assert_eq!(certificate.args["statuses"], serde_json::json!(["ISSUED"]));
    assert_eq!(certificate.args["mostRecent"], serde_json::json!(true));
}

#[test]
fn test_zone_lookup_by_exact_name() {
    let (program, _) = declare(&site("www.example.com", "example.com"), None);

    let zone = program.get(website::ZONE).unwrap();
    assert_eq!(zone.resource_type, route53::TYPE_GET_ZONE);
    assert_eq!(zone.args["name"], serde_json::json!("example.com"));
}

#[test]
fn test_cdn_posture() {
    let (program, _) = declare(&site("www.example.com", "example.com"), None);
    let cdn = program.get(website::CDN).unwrap();
    assert_eq!(cdn.resource_type, cloudfront::TYPE_DISTRIBUTION);

    let args = &cdn.args;
    assert_eq!(args["enabled"], serde_json::json!(true));
    assert_eq!(args["priceClass"], serde_json::json!("PriceClass_100"));
    assert_eq!(
        args["restrictions"]["geoRestriction"]["restrictionType"],
        serde_json::json!("none")
    );

    // Origin: the bucket's website endpoint, HTTP only
    let origin = &args["origins"][0];
    assert_eq!(
        origin["domainName"],
        serde_json::json!({"attr": {"resource": "bucket", "attribute": "websiteEndpoint"}})
    );
    assert_eq!(
        origin["customOriginConfig"]["originProtocolPolicy"],
        serde_json::json!("http-only")
    );
    assert_eq!(origin["customOriginConfig"]["httpPort"], serde_json::json!(80));
    assert_eq!(origin["customOriginConfig"]["httpsPort"], serde_json::json!(443));
    assert_eq!(
        origin["customOriginConfig"]["originSslProtocols"],
        serde_json::json!(["TLSv1.2"])
    );

    // Fixed freshness window, viewer traffic forced onto HTTPS
    let behavior = &args["defaultCacheBehavior"];
    assert_eq!(behavior["minTtl"], serde_json::json!(600));
    assert_eq!(behavior["defaultTtl"], serde_json::json!(600));
    assert_eq!(behavior["maxTtl"], serde_json::json!(600));
    assert_eq!(
        behavior["viewerProtocolPolicy"],
        serde_json::json!("redirect-to-https")
    );
    assert_eq!(
        behavior["allowedMethods"],
        serde_json::json!(["GET", "HEAD", "OPTIONS", "POST", "DELETE", "PUT", "PATCH"])
    );
    assert_eq!(
        behavior["cachedMethods"],
        serde_json::json!(["GET", "HEAD", "OPTIONS"])
    );
    assert_eq!(behavior["forwardedValues"]["queryString"], serde_json::json!(true));
    assert_eq!(
        behavior["forwardedValues"]["cookies"]["forward"],
        serde_json::json!("all")
    );
    assert_eq!(
        behavior["forwardedValues"]["headers"],
        serde_json::json!(["Origin"])
    );

    // TLS terminated with the looked-up certificate over SNI
    let viewer = &args["viewerCertificate"];
    assert_eq!(viewer["cloudfrontDefaultCertificate"], serde_json::json!(false));
    assert_eq!(viewer["sslSupportMethod"], serde_json::json!("sni-only"));
    assert_eq!(
        viewer["acmCertificateArn"],
        serde_json::json!({"attr": {"resource": "certificate", "attribute": "arn"}})
    );
}

#[test]
fn test_alias_record_targets_cdn() {
    let (program, _) = declare(&site("www.example.com", "example.com"), None);
    let record = program.get(website::ALIAS_RECORD).unwrap();

    assert_eq!(record.resource_type, route53::TYPE_RECORD);
    assert_eq!(record.args["type"], serde_json::json!("A"));
    assert_eq!(
        record.args["zoneId"],
        serde_json::json!({"attr": {"resource": "zone", "attribute": "zoneId"}})
    );

    let alias = &record.args["aliases"][0];
    assert_eq!(
        alias["name"],
        serde_json::json!({"attr": {"resource": "cdn", "attribute": "domainName"}})
    );
    assert_eq!(
        alias["zoneId"],
        serde_json::json!({"attr": {"resource": "cdn", "attribute": "hostedZoneId"}})
    );
    assert_eq!(alias["evaluateTargetHealth"], serde_json::json!(true));
}

#[test]
fn test_exports_registered_in_order() {
    let (program, _) = declare(&site("www.example.com", "example.com"), None);

    let names: Vec<&str> = program.exports().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            website::EXPORT_ORIGIN_URL,
            website::EXPORT_ORIGIN_HOSTNAME,
            website::EXPORT_CDN_URL,
            website::EXPORT_CDN_HOSTNAME,
            website::EXPORT_ALIAS_URL,
        ]
    );

    assert_eq!(
        program.exports()[0].value,
        Output::attr("bucket", s3::ATTR_WEBSITE_ENDPOINT).with_prefix("http://")
    );
    assert_eq!(
        program.exports()[4].value.literal_value(),
        Some("https://www.example.com".to_string())
    );
}

#[test]
fn test_outputs_resolve_against_recorded_state() {
    let (program, _) = declare(&site("www.example.com", "example.com"), None);

    let mut state = StackState::new();
    state.record(
        website::BUCKET,
        s3::ATTR_WEBSITE_ENDPOINT,
        "bucket-1.s3-website-us-west-2.amazonaws.com",
    );
    state.record(website::CDN, cloudfront::ATTR_DOMAIN_NAME, "d111.cloudfront.net");

    let resolved: Vec<String> = program
        .exports()
        .iter()
        .map(|e| e.value.resolve(&state).unwrap())
        .collect();
    assert_eq!(
        resolved,
        vec![
            "http://bucket-1.s3-website-us-west-2.amazonaws.com",
            "bucket-1.s3-website-us-west-2.amazonaws.com",
            "https://d111.cloudfront.net",
            "d111.cloudfront.net",
            "https://www.example.com",
        ]
    );
}

#[test]
fn test_declaration_is_deterministic() {
    let config = site("www.example.com", "example.com");
    let (first, _) = declare(&config, Some("42"));
    let (second, _) = declare(&config, Some("42"));
    assert_eq!(first.to_yaml().unwrap(), second.to_yaml().unwrap());
}
