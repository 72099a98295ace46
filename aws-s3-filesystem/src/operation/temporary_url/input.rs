/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::SystemTime;

use aws_sdk_s3::operation::get_object::builders::GetObjectInputBuilder;
use aws_sdk_s3::presigning::PresigningConfigBuilder;
use aws_smithy_types::error::operation::BuildError;

use crate::error::Error;
use crate::operation::temporary_url::{TemporaryUrl, TemporaryUrlOutput};

/// Input type for generating a temporary signed URL for a single object
#[non_exhaustive]
#[derive(Debug)]
pub struct TemporaryUrlInput {
    /// The logical path of the object
    pub path: Option<String>,

    /// Point in time at which the URL stops being valid
    pub expires_at: Option<SystemTime>,

    /// Additional `GetObject` request options merged into the signed request
    pub get_object_options: Option<GetObjectInputBuilder>,

    /// Additional presigning options applied when the request is signed
    pub presigned_options: Option<PresigningConfigBuilder>,
}

impl TemporaryUrlInput {
    /// Creates a new builder-style object to manufacture [`TemporaryUrlInput`](crate::operation::temporary_url::TemporaryUrlInput).
    pub fn builder() -> TemporaryUrlInputBuilder {
        TemporaryUrlInputBuilder::default()
    }

    /// The logical path of the object
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Point in time at which the URL stops being valid
    pub fn expires_at(&self) -> Option<SystemTime> {
        self.expires_at
    }

    /// Additional `GetObject` request options merged into the signed request
    pub fn get_object_options(&self) -> Option<&GetObjectInputBuilder> {
        self.get_object_options.as_ref()
    }

    /// Additional presigning options applied when the request is signed
    pub fn presigned_options(&self) -> Option<&PresigningConfigBuilder> {
        self.presigned_options.as_ref()
    }
}

/// A builder for [`TemporaryUrlInput`](crate::operation::temporary_url::TemporaryUrlInput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct TemporaryUrlInputBuilder {
    pub(crate) path: Option<String>,
    pub(crate) expires_at: Option<SystemTime>,
    pub(crate) get_object_options: Option<GetObjectInputBuilder>,
    pub(crate) presigned_options: Option<PresigningConfigBuilder>,
}

impl TemporaryUrlInputBuilder {
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

    /// Set the point in time at which the URL stops being valid.
    ///
    /// NOTE: An expiration time is required, and must lie in the future when
    /// the URL is generated.
    pub fn expires_at(mut self, input: SystemTime) -> Self {
        self.expires_at = Some(input);
        self
    }

    /// Set the point in time at which the URL stops being valid.
    pub fn set_expires_at(mut self, input: Option<SystemTime>) -> Self {
        self.expires_at = input;
        self
    }

    /// The point in time at which the URL stops being valid.
    pub fn get_expires_at(&self) -> &Option<SystemTime> {
        &self.expires_at
    }

    /// Set additional `GetObject` request options to merge into the signed
    /// request.
    ///
    /// The resolved bucket and storage key always override whatever the
    /// options carry for those two fields.
    pub fn get_object_options(mut self, input: GetObjectInputBuilder) -> Self {
        self.get_object_options = Some(input);
        self
    }

    /// Set additional `GetObject` request options to merge into the signed
    /// request.
    pub fn set_get_object_options(mut self, input: Option<GetObjectInputBuilder>) -> Self {
        self.get_object_options = input;
        self
    }

    /// Set additional presigning options applied when the request is signed.
    ///
    /// The expiration duration derived from `expires_at` always overrides
    /// whatever the options carry for it.
    pub fn presigned_options(mut self, input: PresigningConfigBuilder) -> Self {
        self.presigned_options = Some(input);
        self
    }

    /// Set additional presigning options applied when the request is signed.
    pub fn set_presigned_options(mut self, input: Option<PresigningConfigBuilder>) -> Self {
        self.presigned_options = input;
        self
    }

    /// Consumes the builder and constructs a [`TemporaryUrlInput`](crate::operation::temporary_url::TemporaryUrlInput).
    pub fn build(self) -> Result<TemporaryUrlInput, BuildError> {
        if self.path.is_none() {
            return Err(BuildError::missing_field(
                "path",
                "A logical object path is required",
            ));
        }
        if self.expires_at.is_none() {
            return Err(BuildError::missing_field(
                "expires_at",
                "An expiration time is required",
            ));
        }
        Ok(TemporaryUrlInput {
            path: self.path,
            expires_at: self.expires_at,
            get_object_options: self.get_object_options,
            presigned_options: self.presigned_options,
        })
    }

    /// Generate the temporary URL with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<TemporaryUrlOutput, Error> {
        let input = self.build()?;
        TemporaryUrl::orchestrate(client.handle.clone(), input).await
    }
}
