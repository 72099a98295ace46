/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for retrieving the checksum of a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct ChecksumOutput {
    /// The entity tag of the object with the surrounding quotes stripped
    pub checksum: String,
}

impl ChecksumOutput {
    /// The entity tag of the object with the surrounding quotes stripped
    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}

impl From<ChecksumOutput> for String {
    fn from(value: ChecksumOutput) -> Self {
        value.checksum
    }
}
