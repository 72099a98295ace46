/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::error::Error;
use crate::operation::file_metadata::{FileMetadata, FileMetadataOutput};

/// Input type for retrieving metadata for a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct FileMetadataInput {
    /// The logical path of the object
    pub path: Option<String>,
}

impl FileMetadataInput {
    /// Creates a new builder-style object to manufacture [`FileMetadataInput`](crate::operation::file_metadata::FileMetadataInput).
    pub fn builder() -> FileMetadataInputBuilder {
        FileMetadataInputBuilder::default()
    }

    /// The logical path of the object
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

/// A builder for [`FileMetadataInput`](crate::operation::file_metadata::FileMetadataInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct FileMetadataInputBuilder {
    pub(crate) path: Option<String>,
}

impl FileMetadataInputBuilder {
    /// Set the logical path of the object.
    ///
    /// NOTE: A path is required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.path = Some(input.into());
        self
    }

    /// Set the logical path of the object.
    pub fn set_path(mut self, input: Option<String>) -> Self {
        self.path = input;
        self
    }

    /// The logical path of the object.
    pub fn get_path(&self) -> &Option<String> {
        &self.path
    }

    /// Consumes the builder and constructs a [`FileMetadataInput`](crate::operation::file_metadata::FileMetadataInput).
    pub fn build(self) -> Result<FileMetadataInput, BuildError> {
        if self.path.is_none() {
            return Err(BuildError::missing_field(
                "path",
                "A logical object path is required",
            ));
        }
        Ok(FileMetadataInput { path: self.path })
    }

    /// Retrieve the object metadata with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<FileMetadataOutput, Error> {
        let input = self.build()?;
        FileMetadata::orchestrate(client.handle.clone(), input).await
    }
}
