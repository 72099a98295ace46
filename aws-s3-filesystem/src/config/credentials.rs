/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::config::SharedCredentialsProvider;

/// How the adapter authenticates with the storage provider.
///
/// When no setting is given, the static `key`/`secret` pair from the adapter
/// configuration is used. Environment default credentials are available
/// through [`from_env`](crate::from_env).
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum CredentialsSetting {
    /// An explicit credentials provider.
    Provider(SharedCredentialsProvider),

    /// Send requests unsigned.
    Anonymous,
}
