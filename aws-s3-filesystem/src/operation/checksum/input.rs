/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::error::Error;
use crate::operation::checksum::{Checksum, ChecksumOutput};

/// Input type for retrieving the checksum of a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct ChecksumInput {
    /// The logical path of the object
    pub path: Option<String>,

    /// The requested checksum algorithm, defaults to `etag`
    pub checksum_algo: Option<String>,
}

impl ChecksumInput {
    /// Creates a new builder-style object to manufacture [`ChecksumInput`](crate::operation::checksum::ChecksumInput).
    pub fn builder() -> ChecksumInputBuilder {
        ChecksumInputBuilder::default()
    }

    /// The logical path of the object
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// The requested checksum algorithm
    pub fn checksum_algo(&self) -> Option<&str> {
        self.checksum_algo.as_deref()
    }
}

/// A builder for [`ChecksumInput`](crate::operation::checksum::ChecksumInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ChecksumInputBuilder {
    pub(crate) path: Option<String>,
    pub(crate) checksum_algo: Option<String>,
}

impl ChecksumInputBuilder {
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

    /// Request a specific checksum algorithm.
    ///
    /// Only the provider native `etag` algorithm is supported, which is also
    /// the default.
    pub fn checksum_algo(mut self, input: impl Into<String>) -> Self {
        self.checksum_algo = Some(input.into());
        self
    }

    /// Request a specific checksum algorithm.
    pub fn set_checksum_algo(mut self, input: Option<String>) -> Self {
        self.checksum_algo = input;
        self
    }

    /// The requested checksum algorithm.
    pub fn get_checksum_algo(&self) -> &Option<String> {
        &self.checksum_algo
    }

    /// Consumes the builder and constructs a [`ChecksumInput`](crate::operation::checksum::ChecksumInput).
    pub fn build(self) -> Result<ChecksumInput, BuildError> {
        if self.path.is_none() {
            return Err(BuildError::missing_field(
                "path",
                "A logical object path is required",
            ));
        }
        Ok(ChecksumInput {
            path: self.path,
            checksum_algo: self.checksum_algo,
        })
    }

    /// Retrieve the checksum with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<ChecksumOutput, Error> {
        let input = self.build()?;
        Checksum::orchestrate(client.handle.clone(), input).await
    }
}
