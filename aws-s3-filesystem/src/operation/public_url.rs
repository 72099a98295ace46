/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;

mod output;

use std::sync::Arc;

use url::Url;

use crate::config::Config;
use crate::error::{self, BoxError, Error};

pub use input::{PublicUrlInput, PublicUrlInputBuilder};
pub use output::PublicUrlOutput;

/// Operation struct for generating a browsable URL for a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct PublicUrl;

impl PublicUrl {
    /// Execute a single `PublicUrl` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: PublicUrlInput,
    ) -> Result<PublicUrlOutput, Error> {
        let path = input.path().unwrap_or_default().to_string();
        let key = handle.storage_key(&path);
        let url = object_url(&handle.config, &key)
            .map_err(|err| error::public_url_failed(&path, err))?;
        tracing::trace!(path = %path, url = %url, "generated public URL");
        Ok(PublicUrlOutput { url })
    }
}

/// Construct the browsable URL for a storage key.
///
/// A configured `base_url` wins. Otherwise the configured endpoint (or the
/// default regional endpoint) is used, honoring the addressing style.
fn object_url(config: &Config, key: &str) -> Result<String, BoxError> {
    let mut url = match (config.base_url(), config.endpoint()) {
        (Some(base_url), _) => Url::parse(base_url)?,
        (None, Some(endpoint)) => {
            let mut url = Url::parse(endpoint)?;
            if config.path_style_endpoint() {
                url.path_segments_mut()
                    .map_err(|_| "endpoint cannot be an opaque URL")?
                    .pop_if_empty()
                    .push(config.bucket());
            } else {
                let host = url.host_str().ok_or("endpoint has no host")?;
                let host = format!("{}.{host}", config.bucket());
                url.set_host(Some(&host))?;
            }
            url
        }
        (None, None) => {
            let region = config
                .region()
                .ok_or("neither `base_url`, `endpoint`, nor `region` is configured")?;
            if config.path_style_endpoint() {
                let mut url = Url::parse(&format!("https://s3.{region}.amazonaws.com"))?;
                url.path_segments_mut()
                    .map_err(|_| "endpoint cannot be an opaque URL")?
                    .push(config.bucket());
                url
            } else {
                Url::parse(&format!(
                    "https://{}.s3.{region}.amazonaws.com",
                    config.bucket()
                ))?
            }
        }
    };

    url.path_segments_mut()
        .map_err(|_| "endpoint cannot be an opaque URL")?
        .pop_if_empty()
        .extend(key.split('/'));

    Ok(url.into())
}
