/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use crate::error::{self, Error};

mod credentials;
pub(crate) mod descriptor;

/// Load configuration from the environment
pub mod loader;

pub use credentials::CredentialsSetting;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    key: Option<String>,
    secret: Option<String>,
    credentials: Option<CredentialsSetting>,
    region: Option<String>,
    base_url: Option<String>,
    version: Option<String>,
    bucket: String,
    prefix: String,
    path_style_endpoint: bool,
    options: HashMap<String, String>,
    stream_reads: bool,
    endpoint: Option<String>,
    client: Option<aws_sdk_s3::Client>,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The configured access key id, if any
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The configured secret access key, if any
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    /// The explicit credentials setting, if any
    pub fn credentials(&self) -> Option<&CredentialsSetting> {
        self.credentials.as_ref()
    }

    /// The target storage region, if any
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The base URL override used for public URL construction, if any
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// The pinned API version, if any
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The bucket this adapter operates on
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The path prefix prepended to every logical path
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether path-style addressing is forced instead of virtual-hosted style
    pub fn path_style_endpoint(&self) -> bool {
        self.path_style_endpoint
    }

    /// Additional options passed through to the underlying client untouched
    pub fn options(&self) -> &HashMap<String, String> {
        &self.options
    }

    /// Whether reads should be surfaced as streams instead of buffered contents
    pub fn stream_reads(&self) -> bool {
        self.stream_reads
    }

    /// The endpoint URL for S3 compatible services, if any
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// The explicit S3 client override, if any
    pub fn client(&self) -> Option<&aws_sdk_s3::Client> {
        self.client.as_ref()
    }
}

/// Fluent style builder for [Config]
///
/// Requirements are checked once at [`build`](Builder::build) time: `bucket`
/// is always required, and unless explicit credentials (or an explicit client
/// carrying its own) are set, `key` and `secret` both are as well.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    key: Option<String>,
    secret: Option<String>,
    credentials: Option<CredentialsSetting>,
    region: Option<String>,
    base_url: Option<String>,
    version: Option<String>,
    bucket: Option<String>,
    prefix: String,
    path_style_endpoint: bool,
    options: HashMap<String, String>,
    stream_reads: bool,
    endpoint: Option<String>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the access key id used for static credentials.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the access key id used for static credentials.
    pub fn set_key(mut self, key: Option<String>) -> Self {
        self.key = key;
        self
    }

    /// The access key id currently set on the builder.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Set the secret access key used for static credentials.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Set the secret access key used for static credentials.
    pub fn set_secret(mut self, secret: Option<String>) -> Self {
        self.secret = secret;
        self
    }

    /// Set an explicit credentials setting.
    ///
    /// When set, the static `key`/`secret` pair is not required and not used.
    pub fn credentials(mut self, credentials: CredentialsSetting) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// The credentials setting currently set on the builder.
    pub fn get_credentials(&self) -> &Option<CredentialsSetting> {
        &self.credentials
    }

    /// Set the target storage region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the target storage region.
    pub fn set_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    /// The region currently set on the builder.
    pub fn get_region(&self) -> &Option<String> {
        &self.region
    }

    /// Set the base URL override used when constructing public URLs.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the base URL override used when constructing public URLs.
    pub fn set_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    /// Pin the API version recorded in the client descriptor.
    ///
    /// Defaults to `latest` when unset.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the bucket this adapter operates on.
    ///
    /// NOTE: A bucket is required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the path prefix prepended to every logical path.
    ///
    /// Default is the empty prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Force path-style addressing instead of virtual-hosted style.
    pub fn path_style_endpoint(mut self, path_style_endpoint: bool) -> Self {
        self.path_style_endpoint = path_style_endpoint;
        self
    }

    /// Add a single pass-through option for the underlying client.
    ///
    /// To override the contents of this collection use
    /// [`set_options`](Self::set_options)
    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Set the pass-through options for the underlying client.
    pub fn set_options(mut self, options: HashMap<String, String>) -> Self {
        self.options = options;
        self
    }

    /// Surface reads as streams instead of buffered contents.
    pub fn stream_reads(mut self, stream_reads: bool) -> Self {
        self.stream_reads = stream_reads;
        self
    }

    /// Set the endpoint URL for S3 compatible services.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the endpoint URL for S3 compatible services.
    pub fn set_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Set an explicit S3 client to use.
    ///
    /// An explicit client carries its own credential configuration, so the
    /// static `key`/`secret` pair is not required.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    pub fn build(self) -> Result<Config, Error> {
        if self.credentials.is_none() && self.client.is_none() {
            if self.key.is_none() {
                return Err(error::invalid_config("key"));
            }
            if self.secret.is_none() {
                return Err(error::invalid_config("secret"));
            }
        }
        let bucket = match self.bucket {
            Some(bucket) => bucket,
            None => return Err(error::invalid_config("bucket")),
        };

        Ok(Config {
            key: self.key,
            secret: self.secret,
            credentials: self.credentials,
            region: self.region,
            base_url: self.base_url,
            version: self.version,
            bucket,
            prefix: self.prefix,
            path_style_endpoint: self.path_style_endpoint,
            options: self.options,
            stream_reads: self.stream_reads,
            endpoint: self.endpoint,
            client: self.client,
        })
    }
}
