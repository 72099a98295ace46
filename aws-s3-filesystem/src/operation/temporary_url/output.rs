/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for generating a temporary signed URL for a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct TemporaryUrlOutput {
    /// The presigned URL granting time-bounded access to the object
    pub url: String,
}

impl TemporaryUrlOutput {
    /// The presigned URL granting time-bounded access to the object
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl From<TemporaryUrlOutput> for String {
    fn from(value: TemporaryUrlOutput) -> Self {
        value.url
    }
}
