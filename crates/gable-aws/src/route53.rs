//! Route 53 zone lookup and alias record vocabulary

use gable_engine::Output;
use serde::Serialize;

/// Engine type token for the hosted-zone lookup
pub const TYPE_GET_ZONE: &str = "aws:route53:getZone";

/// Engine type token for a DNS record
pub const TYPE_RECORD: &str = "aws:route53:Record";

/// Hosted-zone id attribute
pub const ATTR_ZONE_ID: &str = "zoneId";

/// Arguments for looking up a hosted zone by exact name
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetZoneArgs {
    /// Zone name, e.g. "example.com"
    pub name: String,
}

/// DNS record types used by the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
}

/// Arguments for a DNS record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordArgs {
    /// Record name relative to the zone; empty means the zone apex
    pub name: String,

    /// Hosted zone the record is created in
    pub zone_id: Output,

    /// Record type
    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// Alias targets instead of literal record values
    pub aliases: Vec<RecordAlias>,
}

/// Alias target pointing the record at another AWS resource
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAlias {
    /// DNS name of the target
    pub name: Output,

    /// Hosted-zone id of the target
    pub zone_id: Output,

    /// Whether resolvers should check the target's health
    pub evaluate_target_health: bool,
}
