/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;

use crate::client::Client;
use crate::error::Error;
use crate::operation::checksum::{Checksum, ChecksumInput, ChecksumOutput};
use crate::operation::file_metadata::{FileMetadata, FileMetadataInput, FileMetadataOutput};
use crate::operation::public_url::{PublicUrl, PublicUrlInput, PublicUrlOutput};
use crate::operation::temporary_url::{TemporaryUrl, TemporaryUrlInput, TemporaryUrlOutput};

/// The capability contract a storage backend satisfies to participate in a
/// generic filesystem abstraction.
///
/// Construction time validation lives in
/// [`Config::builder`](crate::Config::builder); the capabilities below are
/// per-object queries, each a single validate, delegate, wrap step with no
/// internal retries.
#[async_trait]
pub trait FilesystemAdapter: Send + Sync {
    /// Generate a browsable URL for the object at the given logical path.
    async fn public_url(&self, input: PublicUrlInput) -> Result<PublicUrlOutput, Error>;

    /// Retrieve the provider native checksum for the object at the given
    /// logical path.
    async fn checksum(&self, input: ChecksumInput) -> Result<ChecksumOutput, Error>;

    /// Generate a time-bounded signed URL granting access to the object
    /// without separate authentication.
    async fn temporary_url(&self, input: TemporaryUrlInput)
        -> Result<TemporaryUrlOutput, Error>;

    /// Retrieve metadata for the object at the given logical path.
    async fn file_metadata(&self, input: FileMetadataInput)
        -> Result<FileMetadataOutput, Error>;
}

#[async_trait]
impl FilesystemAdapter for Client {
    async fn public_url(&self, input: PublicUrlInput) -> Result<PublicUrlOutput, Error> {
        PublicUrl::orchestrate(self.handle.clone(), input).await
    }

    async fn checksum(&self, input: ChecksumInput) -> Result<ChecksumOutput, Error> {
        Checksum::orchestrate(self.handle.clone(), input).await
    }

    async fn temporary_url(
        &self,
        input: TemporaryUrlInput,
    ) -> Result<TemporaryUrlOutput, Error> {
        TemporaryUrl::orchestrate(self.handle.clone(), input).await
    }

    async fn file_metadata(
        &self,
        input: FileMetadataInput,
    ) -> Result<FileMetadataOutput, Error> {
        FileMetadata::orchestrate(self.handle.clone(), input).await
    }
}
