/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod convert;

mod input;

mod output;

use std::sync::Arc;
use std::time::SystemTime;

use aws_sdk_s3::presigning::PresigningConfig;

use crate::error::{self, Error};

use convert::apply_get_object_options;

pub use input::{TemporaryUrlInput, TemporaryUrlInputBuilder};
pub use output::TemporaryUrlOutput;

/// Operation struct for generating a temporary signed URL for a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct TemporaryUrl;

impl TemporaryUrl {
    /// Execute a single `TemporaryUrl` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: TemporaryUrlInput,
    ) -> Result<TemporaryUrlOutput, Error> {
        let path = input.path().unwrap_or_default().to_string();
        let expires_at = match input.expires_at() {
            Some(expires_at) => expires_at,
            None => return Err(error::invalid_input("an expiration time is required")),
        };
        let key = handle.storage_key(&path);

        // caller supplied options first, the resolved location always wins
        let request = apply_get_object_options(
            handle.s3_client().get_object(),
            input.get_object_options.as_ref(),
        )
        .bucket(handle.config.bucket())
        .key(key);

        let expires_in = expires_at
            .duration_since(SystemTime::now())
            .map_err(|err| error::temporary_url_failed(&path, err))?;

        let presigning = input
            .presigned_options
            .unwrap_or_else(PresigningConfig::builder)
            .expires_in(expires_in)
            .build()
            .map_err(|err| error::temporary_url_failed(&path, err))?;

        let presigned = request
            .presigned(presigning)
            .await
            .map_err(|err| error::temporary_url_failed(&path, err))?;

        tracing::trace!(path = %path, "generated temporary URL");
        Ok(TemporaryUrlOutput {
            url: presigned.uri().to_string(),
        })
    }
}
