//! # gable-aws
//!
//! AWS-flavored resource vocabulary for the Gable declaration model:
//! - Typed argument structs serializing to the engine's wire names
//! - Engine type tokens and attribute names for each resource kind
//! - The complete static-website stack declaration ([`website::declare`])

pub mod acm;
pub mod cloudfront;
pub mod error;
pub mod provider;
pub mod route53;
pub mod s3;
pub mod website;

pub use error::{Error, Result};
pub use website::{declare, StaticSite};
