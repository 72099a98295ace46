/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! An Amazon S3 backed adapter for generic filesystem abstractions.
//!
//! This crate turns adapter configuration (credentials, region, bucket,
//! endpoint, addressing style) into a configured Amazon S3 client and exposes
//! the filesystem facing queries built on top of it: browsable public URLs,
//! provider native checksums, and time bounded presigned URLs. Logical paths
//! are mapped to storage keys through a configured prefix.
//!
//! # Examples
//!
//! Construct an adapter client from explicit configuration:
//!
//! ```no_run
//! # fn example() -> Result<(), aws_s3_filesystem::error::Error> {
//! let config = aws_s3_filesystem::Config::builder()
//!     .key("<access key id>")
//!     .secret("<secret access key>")
//!     .region("eu-west-1")
//!     .bucket("my-bucket")
//!     .prefix("uploads/")
//!     .build()?;
//! let client = aws_s3_filesystem::Client::new(config);
//! # let _ = client;
//! # Ok(())
//! # }
//! ```
//!
//! Mint a presigned URL for a logical path:
//!
//! ```no_run
//! # use std::time::{Duration, SystemTime};
//! # async fn example(client: &aws_s3_filesystem::Client) -> Result<(), aws_s3_filesystem::error::Error> {
//! use aws_s3_filesystem::operation::temporary_url::TemporaryUrlInput;
//!
//! let output = TemporaryUrlInput::builder()
//!     .path("reports/2024.pdf")
//!     .expires_at(SystemTime::now() + Duration::from_secs(900))
//!     .send_with(client)
//!     .await?;
//! println!("{}", output.url());
//! # Ok(())
//! # }
//! ```

/// Error types emitted by `aws-s3-filesystem`
pub mod error;

/// Adapter configuration
pub mod config;

/// Filesystem adapter client
pub mod client;

/// The capability contract satisfied by this adapter
pub mod contract;

/// Adapter operations
pub mod operation;

/// Mapping of logical paths to storage keys
pub mod path;

pub use self::client::Client;
pub use self::config::Config;
use self::config::loader::ConfigLoader;

/// Create a config loader that resolves credentials and region from the
/// environment.
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
