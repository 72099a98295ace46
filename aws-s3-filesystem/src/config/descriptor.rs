/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

use crate::config::{Config, CredentialsSetting};

/// API version recorded when the configuration does not pin one.
const DEFAULT_VERSION: &str = "latest";

/// The construction parameters for the underlying S3 client, derived from a
/// validated [`Config`].
///
/// Mirrors the configuration surface of the wrapped SDK client: optional
/// entries are only present when the adapter configuration asked for them.
#[derive(Debug, Clone)]
pub(crate) struct ClientDescriptor {
    pub(crate) credentials: CredentialsEntry,
    pub(crate) use_path_style_endpoint: Option<bool>,
    pub(crate) region: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) endpoint: Option<String>,
    pub(crate) version: String,
}

/// The credentials entry of a [`ClientDescriptor`].
#[derive(Debug, Clone)]
pub(crate) enum CredentialsEntry {
    /// The static key/secret pair from the adapter configuration.
    Static { key: String, secret: String },

    /// An explicit setting, passed through as-is.
    Explicit(CredentialsSetting),
}

impl ClientDescriptor {
    /// Derive the descriptor from a validated config.
    pub(crate) fn from_config(config: &Config) -> ClientDescriptor {
        let credentials = match config.credentials() {
            Some(setting) => CredentialsEntry::Explicit(setting.clone()),
            // presence of the pair was validated at build time
            None => CredentialsEntry::Static {
                key: config.key().unwrap_or_default().to_string(),
                secret: config.secret().unwrap_or_default().to_string(),
            },
        };

        ClientDescriptor {
            credentials,
            use_path_style_endpoint: config.path_style_endpoint().then_some(true),
            region: config.region().map(str::to_string),
            base_url: config.base_url().map(str::to_string),
            endpoint: config.endpoint().map(str::to_string),
            version: config.version().unwrap_or(DEFAULT_VERSION).to_string(),
        }
    }

    /// Construct the S3 client described by this descriptor.
    ///
    /// `base_url` and `version` only shape URL construction and compatibility
    /// metadata; they do not feed the SDK client configuration.
    pub(crate) fn build_client(&self) -> aws_sdk_s3::Client {
        let mut builder =
            aws_sdk_s3::config::Builder::new().behavior_version(BehaviorVersion::latest());

        match &self.credentials {
            CredentialsEntry::Static { key, secret } => {
                builder = builder.credentials_provider(Credentials::new(
                    key.clone(),
                    secret.clone(),
                    None,
                    None,
                    "aws-s3-filesystem",
                ));
            }
            CredentialsEntry::Explicit(CredentialsSetting::Provider(provider)) => {
                builder.set_credentials_provider(Some(provider.clone()));
            }
            // unsigned access, leave the provider unset
            CredentialsEntry::Explicit(CredentialsSetting::Anonymous) => {}
        }

        if let Some(region) = &self.region {
            builder = builder.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &self.endpoint {
            builder = builder.endpoint_url(endpoint);
        }
        if self.use_path_style_endpoint == Some(true) {
            builder = builder.force_path_style(true);
        }

        aws_sdk_s3::Client::from_conf(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Config, CredentialsSetting};

    fn config() -> Builder {
        Config::builder()
            .key("ANOTREAL")
            .secret("notrealsecret")
            .bucket("test-bucket")
    }

    #[test]
    fn static_pair_when_no_explicit_credentials() {
        let descriptor = ClientDescriptor::from_config(&config().build().unwrap());
        match descriptor.credentials {
            CredentialsEntry::Static { key, secret } => {
                assert_eq!(key, "ANOTREAL");
                assert_eq!(secret, "notrealsecret");
            }
            other => panic!("expected static credentials, got {other:?}"),
        }
    }

    #[test]
    fn explicit_credentials_pass_through() {
        let descriptor = ClientDescriptor::from_config(
            &config()
                .credentials(CredentialsSetting::Anonymous)
                .build()
                .unwrap(),
        );
        assert!(matches!(
            descriptor.credentials,
            CredentialsEntry::Explicit(CredentialsSetting::Anonymous)
        ));
    }

    #[test]
    fn path_style_entry_present_iff_enabled() {
        let off = ClientDescriptor::from_config(&config().build().unwrap());
        assert_eq!(off.use_path_style_endpoint, None);

        let on = ClientDescriptor::from_config(
            &config().path_style_endpoint(true).build().unwrap(),
        );
        assert_eq!(on.use_path_style_endpoint, Some(true));
    }

    #[test]
    fn optional_entries_present_iff_configured() {
        let bare = ClientDescriptor::from_config(&config().build().unwrap());
        assert_eq!(bare.region, None);
        assert_eq!(bare.base_url, None);
        assert_eq!(bare.endpoint, None);

        let full = ClientDescriptor::from_config(
            &config()
                .region("eu-west-1")
                .base_url("https://cdn.example.com")
                .endpoint("https://storage.example.com")
                .build()
                .unwrap(),
        );
        assert_eq!(full.region.as_deref(), Some("eu-west-1"));
        assert_eq!(full.base_url.as_deref(), Some("https://cdn.example.com"));
        assert_eq!(full.endpoint.as_deref(), Some("https://storage.example.com"));
    }

    #[test]
    fn version_defaults_to_latest() {
        let descriptor = ClientDescriptor::from_config(&config().build().unwrap());
        assert_eq!(descriptor.version, "latest");

        let pinned =
            ClientDescriptor::from_config(&config().version("2006-03-01").build().unwrap());
        assert_eq!(pinned.version, "2006-03-01");
    }
}
