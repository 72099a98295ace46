/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;

mod output;

use std::sync::Arc;

use crate::error::{self, Error};
use crate::operation::file_metadata::{FileMetadata, FileMetadataInput};

pub use input::{ChecksumInput, ChecksumInputBuilder};
pub use output::ChecksumOutput;

/// The only supported checksum algorithm: the provider native entity tag.
const ETAG_ALGO: &str = "etag";

/// Operation struct for retrieving the checksum of a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct Checksum;

impl Checksum {
    /// Execute a single `Checksum` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ChecksumInput,
    ) -> Result<ChecksumOutput, Error> {
        let path = input.path().unwrap_or_default().to_string();
        let algo = input.checksum_algo().unwrap_or(ETAG_ALGO);
        if algo != ETAG_ALGO {
            return Err(error::unsupported_checksum_algo(algo));
        }

        let metadata_input = FileMetadataInput::builder().path(&path).build()?;
        let metadata = FileMetadata::orchestrate(handle, metadata_input)
            .await
            .map_err(|err| error::checksum_unavailable(&path, err))?;

        match metadata.e_tag() {
            // stored entity tags are conventionally wrapped in double quotes
            Some(tag) => Ok(ChecksumOutput {
                checksum: tag.trim_matches('"').to_string(),
            }),
            None => Err(error::checksum_unavailable(
                &path,
                "entity tag not available",
            )),
        }
    }
}
