/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for generating a browsable URL for a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct PublicUrlOutput {
    /// The browsable URL for the object
    pub url: String,
}

impl PublicUrlOutput {
    /// The browsable URL for the object
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl From<PublicUrlOutput> for String {
    fn from(value: PublicUrlOutput) -> Self {
        value.url
    }
}
