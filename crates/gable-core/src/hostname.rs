//! Hostname derivation and hosted-zone validation
//!
//! The site hostname is derived from the configured frontend host, optionally
//! scoped to a pull request ("pr-42.www.example.com"). The derived hostname
//! must sit inside the configured hosted zone before any resource is declared.

use crate::error::{Error, Result};

/// Environment variable carrying the pull-request number
pub const PR_NUM_ENV: &str = "PR_NUM";

/// Read the pull-request number from the environment.
///
/// An unset variable and an empty value are both treated as "no pull request".
pub fn pr_number_from_env() -> Option<String> {
    std::env::var(PR_NUM_ENV).ok().filter(|v| !v.is_empty())
}

/// Derive the hostname the site will be served at.
///
/// With a pull-request number the hostname is prefixed as "pr-<id>.<base>",
/// giving each pull request its own site. An empty id behaves like no id.
/// The id is interpolated verbatim; nothing checks it is numeric.
pub fn derive(base: &str, pr_number: Option<&str>) -> String {
    match pr_number {
        Some(id) if !id.is_empty() => format!("pr-{id}.{base}"),
        _ => base.to_string(),
    }
}

/// Check that `host` sits inside the hosted zone `zone`.
///
/// The check is a byte-wise suffix comparison, not a DNS-label comparison:
/// "badexample.com" passes against zone "example.com".
pub fn ensure_within_zone(host: &str, zone: &str) -> Result<()> {
    if host.ends_with(zone) {
        Ok(())
    } else {
        Err(Error::invalid_configuration(format!(
            "frontend host '{host}' must be a subdomain of the zone host '{zone}'"
        )))
    }
}

/// Compute the DNS record name for `host` relative to the zone.
///
/// Strips the zone suffix and any surrounding dots; an empty result means
/// the record sits at the zone apex.
pub fn record_name(host: &str, zone: &str) -> Result<String> {
    let prefix = host.strip_suffix(zone).ok_or_else(|| {
        Error::invalid_configuration(format!(
            "frontend host '{host}' must be a subdomain of the zone host '{zone}'"
        ))
    })?;
    Ok(prefix.trim_matches('.').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_derive_without_pr() {
        assert_eq!(derive("www.example.com", None), "www.example.com");
    }

    #[test]
    fn test_derive_with_pr() {
        assert_eq!(
            derive("www.example.com", Some("42")),
            "pr-42.www.example.com"
        );
    }

    #[test]
    fn test_derive_empty_pr_behaves_like_none() {
        assert_eq!(derive("www.example.com", Some("")), "www.example.com");
    }

    #[test]
    fn test_derive_interpolates_id_verbatim() {
        // No numeric validation on the id
        assert_eq!(derive("example.com", Some("abc")), "pr-abc.example.com");
    }

    #[test]
    fn test_ensure_within_zone_accepts_subdomain() {
        assert!(ensure_within_zone("www.example.com", "example.com").is_ok());
    }

    #[test]
    fn test_ensure_within_zone_accepts_equal_host() {
        assert!(ensure_within_zone("example.com", "example.com").is_ok());
    }

    #[test]
    fn test_ensure_within_zone_is_byte_wise() {
        // Suffix comparison only, no label boundary
        assert!(ensure_within_zone("badexample.com", "example.com").is_ok());
    }

    #[test]
    fn test_ensure_within_zone_rejects_mismatch() {
        let err = ensure_within_zone("www.example.com", "other.com").unwrap_err();
        assert!(
            matches!(err, Error::InvalidConfiguration { .. }),
            "Expected InvalidConfiguration, got: {:?}",
            err
        );
        assert!(err.to_string().contains("other.com"));
    }

    #[test]
    fn test_record_name_subdomain() {
        assert_eq!(
            record_name("www.example.com", "example.com").unwrap(),
            "www"
        );
    }

    #[test]
    fn test_record_name_pr_scoped() {
        assert_eq!(
            record_name("pr-42.example.com", "example.com").unwrap(),
            "pr-42"
        );
    }

    #[test]
    fn test_record_name_apex_is_empty() {
        assert_eq!(record_name("example.com", "example.com").unwrap(), "");
    }

    #[test]
    fn test_record_name_rejects_foreign_zone() {
        let err = record_name("www.example.com", "other.com").unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn test_pr_number_from_env_set() {
        std::env::set_var(PR_NUM_ENV, "7");
        assert_eq!(pr_number_from_env(), Some("7".to_string()));
        std::env::remove_var(PR_NUM_ENV);
    }

    #[test]
    #[serial]
    fn test_pr_number_from_env_empty_is_none() {
        std::env::set_var(PR_NUM_ENV, "");
        assert_eq!(pr_number_from_env(), None);
        std::env::remove_var(PR_NUM_ENV);
    }

    #[test]
    #[serial]
    fn test_pr_number_from_env_unset_is_none() {
        std::env::remove_var(PR_NUM_ENV);
        assert_eq!(pr_number_from_env(), None);
    }
}
