/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::DateTime;

/// Output type for retrieving metadata for a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct FileMetadataOutput {
    /// The logical path the metadata belongs to
    pub path: String,

    /// The entity tag of the object, as stored (including surrounding quotes)
    pub e_tag: Option<String>,

    /// Size of the object body in bytes
    pub content_length: Option<i64>,

    /// A standard MIME type describing the format of the object data
    pub content_type: Option<String>,

    /// Date and time when the object was last modified
    pub last_modified: Option<DateTime>,

    /// Version id of the object, when bucket versioning is enabled
    pub version_id: Option<String>,
}

impl FileMetadataOutput {
    /// The logical path the metadata belongs to
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The entity tag of the object, as stored (including surrounding quotes)
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Size of the object body in bytes
    pub fn content_length(&self) -> Option<i64> {
        self.content_length
    }

    /// A standard MIME type describing the format of the object data
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Date and time when the object was last modified
    pub fn last_modified(&self) -> Option<&DateTime> {
        self.last_modified.as_ref()
    }

    /// Version id of the object, when bucket versioning is enabled
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }
}
