/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of adapter errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required configuration property is missing or inconsistent
    ConfigurationInvalid,

    /// Operation input validation issues
    InputInvalid,

    /// A checksum algorithm other than the provider native entity tag was requested
    UnsupportedChecksumAlgorithm {
        /// The algorithm that was requested
        algo: String,
    },

    /// A checksum could not be provided for an object
    ChecksumUnavailable {
        /// The logical path the checksum was requested for
        path: String,
    },

    /// Object metadata could not be retrieved
    MetadataRetrieval {
        /// The logical path metadata was requested for
        path: String,
    },

    /// A public URL could not be generated
    PublicUrlGeneration {
        /// The logical path the URL was requested for
        path: String,
    },

    /// A temporary signed URL could not be generated
    TemporaryUrlGeneration {
        /// The logical path the URL was requested for
        path: String,
    },
}

impl Error {
    /// Creates a new adapter [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

pub(crate) fn invalid_config(field: &'static str) -> Error {
    Error::new(
        ErrorKind::ConfigurationInvalid,
        format!("the `{field}` property must be set"),
    )
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn unsupported_checksum_algo(algo: impl Into<String>) -> Error {
    let algo = algo.into();
    let message =
        format!("only the provider native `etag` algorithm is supported, requested `{algo}`");
    Error::new(ErrorKind::UnsupportedChecksumAlgorithm { algo }, message)
}

pub(crate) fn checksum_unavailable<E>(path: impl Into<String>, err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::ChecksumUnavailable { path: path.into() }, err)
}

pub(crate) fn metadata_retrieval_failed<E>(path: impl Into<String>, err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::MetadataRetrieval { path: path.into() }, err)
}

pub(crate) fn public_url_failed<E>(path: impl Into<String>, err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::PublicUrlGeneration { path: path.into() }, err)
}

pub(crate) fn temporary_url_failed<E>(path: impl Into<String>, err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::TemporaryUrlGeneration { path: path.into() }, err)
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::ConfigurationInvalid => write!(f, "invalid adapter configuration"),
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::UnsupportedChecksumAlgorithm { algo } => {
                write!(f, "checksum algorithm `{algo}` is not supported")
            }
            ErrorKind::ChecksumUnavailable { path } => {
                write!(f, "unable to provide a checksum for `{path}`")
            }
            ErrorKind::MetadataRetrieval { path } => {
                write!(f, "unable to retrieve metadata for `{path}`")
            }
            ErrorKind::PublicUrlGeneration { path } => {
                write!(f, "unable to generate a public URL for `{path}`")
            }
            ErrorKind::TemporaryUrlGeneration { path } => {
                write!(f, "unable to generate a temporary URL for `{path}`")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref() as _)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        invalid_input(value)
    }
}
