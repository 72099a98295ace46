/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;

mod output;

use std::sync::Arc;

use aws_sdk_s3::types::ChecksumMode;

use crate::error::{self, Error};

pub use input::{FileMetadataInput, FileMetadataInputBuilder};
pub use output::FileMetadataOutput;

/// Operation struct for retrieving metadata for a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct FileMetadata;

impl FileMetadata {
    /// Execute a single `FileMetadata` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: FileMetadataInput,
    ) -> Result<FileMetadataOutput, Error> {
        let path = input.path().unwrap_or_default().to_string();
        let key = handle.storage_key(&path);
        tracing::trace!(path = %path, key = %key, "retrieving object metadata");

        let head = handle
            .s3_client()
            .head_object()
            .bucket(handle.config.bucket())
            .key(key)
            .checksum_mode(ChecksumMode::Enabled)
            .send()
            .await
            .map_err(|err| error::metadata_retrieval_failed(&path, err))?;

        Ok(FileMetadataOutput {
            path,
            e_tag: head.e_tag().map(str::to_string),
            content_length: head.content_length(),
            content_type: head.content_type().map(str::to_string),
            last_modified: head.last_modified().cloned(),
            version_id: head.version_id().map(str::to_string),
        })
    }
}
