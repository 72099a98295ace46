/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::error::Error;
use crate::operation::public_url::{PublicUrl, PublicUrlOutput};

/// Input type for generating a browsable URL for a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct PublicUrlInput {
    /// The logical path of the object
    pub path: Option<String>,
}

impl PublicUrlInput {
    /// Creates a new builder-style object to manufacture [`PublicUrlInput`](crate::operation::public_url::PublicUrlInput).
    pub fn builder() -> PublicUrlInputBuilder {
        PublicUrlInputBuilder::default()
    }

    /// The logical path of the object
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

/// A builder for [`PublicUrlInput`](crate::operation::public_url::PublicUrlInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct PublicUrlInputBuilder {
    pub(crate) path: Option<String>,
}

impl PublicUrlInputBuilder {
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

    /// Consumes the builder and constructs a [`PublicUrlInput`](crate::operation::public_url::PublicUrlInput).
    pub fn build(self) -> Result<PublicUrlInput, BuildError> {
        if self.path.is_none() {
            return Err(BuildError::missing_field(
                "path",
                "A logical object path is required",
            ));
        }
        Ok(PublicUrlInput { path: self.path })
    }

    /// Generate the public URL with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<PublicUrlOutput, Error> {
        let input = self.build()?;
        PublicUrl::orchestrate(client.handle.clone(), input).await
    }
}
