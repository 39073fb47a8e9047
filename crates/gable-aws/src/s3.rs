//! S3 bucket, permission, and folder-sync vocabulary

use gable_engine::Output;
use serde::Serialize;

/// Engine type token for a website-configured bucket
pub const TYPE_BUCKET: &str = "aws:s3:Bucket";

/// Engine type token for bucket ownership controls
pub const TYPE_BUCKET_OWNERSHIP_CONTROLS: &str = "aws:s3:BucketOwnershipControls";

/// Engine type token for a bucket public-access block
pub const TYPE_BUCKET_PUBLIC_ACCESS_BLOCK: &str = "aws:s3:BucketPublicAccessBlock";

/// Engine type token for a local-directory-to-bucket sync binding
pub const TYPE_BUCKET_FOLDER: &str = "synced-folder:S3BucketFolder";

/// Bucket name attribute, resolved after creation
pub const ATTR_BUCKET: &str = "bucket";

/// Bucket ARN attribute
pub const ATTR_ARN: &str = "arn";

/// Static-website endpoint attribute (HTTP only)
pub const ATTR_WEBSITE_ENDPOINT: &str = "websiteEndpoint";

/// Arguments for a bucket serving a static website
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketArgs {
    /// Static-website hosting configuration
    pub website: BucketWebsiteArgs,
}

/// Website hosting configuration for a bucket
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketWebsiteArgs {
    /// Document served for the root URL
    pub index_document: String,

    /// Document served for missing objects
    pub error_document: String,
}

/// Who owns objects written to the bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObjectOwnership {
    BucketOwnerPreferred,
    ObjectWriter,
    BucketOwnerEnforced,
}

/// Arguments for bucket ownership controls
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketOwnershipControlsArgs {
    /// Name of the governed bucket
    pub bucket: Output,

    /// Ownership rule
    pub rule: OwnershipControlsRule,
}

/// A single ownership rule
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipControlsRule {
    pub object_ownership: ObjectOwnership,
}

/// Arguments for a bucket public-access block
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketPublicAccessBlockArgs {
    /// Name of the governed bucket
    pub bucket: Output,

    /// Whether public ACLs are blocked
    pub block_public_acls: bool,
}

/// Canned object ACL applied during upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CannedAcl {
    Private,
    PublicRead,
}

/// Arguments for the folder-sync binding
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketFolderArgs {
    /// Name of the destination bucket
    pub bucket_name: Output,

    /// Local directory whose contents are uploaded
    pub path: camino::Utf8PathBuf,

    /// ACL applied to every uploaded object
    pub acl: CannedAcl,
}
