/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::config::descriptor::ClientDescriptor;
use crate::path::PathPrefixer;
use crate::Config;

/// Filesystem adapter client for Amazon Simple Storage Service.
///
/// Cheap to clone, all clones share the same underlying handle.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations: the validated adapter config,
/// the wrapped S3 client, and the path prefixer.
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: Config,
    pub(crate) s3: aws_sdk_s3::Client,
    pub(crate) prefixer: PathPrefixer,
}

impl Handle {
    /// The S3 client to use for SDK operations
    pub(crate) fn s3_client(&self) -> &aws_sdk_s3::Client {
        &self.s3
    }

    /// The physical storage key for a logical path.
    pub(crate) fn storage_key(&self, path: &str) -> String {
        self.prefixer.prefix_path(path)
    }
}

impl Client {
    /// Creates a new client from a validated adapter [`Config`].
    ///
    /// The underlying S3 client is constructed once, up front, from the
    /// configuration descriptor (unless an explicit client override was
    /// configured). No connectivity validation happens here, failures surface
    /// on first use.
    pub fn new(config: Config) -> Client {
        let s3 = match config.client() {
            Some(existing) => existing.clone(),
            None => ClientDescriptor::from_config(&config).build_client(),
        };
        let prefixer = PathPrefixer::new(config.prefix());
        let handle = Arc::new(Handle {
            config,
            s3,
            prefixer,
        });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }
}
