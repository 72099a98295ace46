/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::config::{Builder, Config, CredentialsSetting};
use crate::error::Error;

/// Load adapter [`Config`] from the environment.
///
/// Credentials and region resolve through the default provider chain when the
/// builder does not pin them explicitly.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// Set the bucket this adapter operates on.
    ///
    /// NOTE: A bucket is required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.builder = self.builder.bucket(bucket);
        self
    }

    /// Set the path prefix prepended to every logical path.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.builder = self.builder.prefix(prefix);
        self
    }

    /// Set the target storage region, overriding the environment.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.builder = self.builder.region(region);
        self
    }

    /// Set the endpoint URL for S3 compatible services.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.builder = self.builder.endpoint(endpoint);
        self
    }

    /// Set the base URL override used when constructing public URLs.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.builder = self.builder.base_url(base_url);
        self
    }

    /// Force path-style addressing instead of virtual-hosted style.
    pub fn path_style_endpoint(mut self, path_style_endpoint: bool) -> Self {
        self.builder = self.builder.path_style_endpoint(path_style_endpoint);
        self
    }

    /// Surface reads as streams instead of buffered contents.
    pub fn stream_reads(mut self, stream_reads: bool) -> Self {
        self.builder = self.builder.stream_reads(stream_reads);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, credentials and region are resolved from the environment.
    pub async fn load(self) -> Result<Config, Error> {
        let shared_config = aws_config::from_env().load().await;
        let mut builder = self.builder;

        if builder.get_credentials().is_none() && builder.get_key().is_none() {
            if let Some(provider) = shared_config.credentials_provider() {
                builder = builder.credentials(CredentialsSetting::Provider(provider));
            }
        }
        if builder.get_region().is_none() {
            if let Some(region) = shared_config.region() {
                builder = builder.region(region.to_string());
            }
        }

        builder.build()
    }
}
