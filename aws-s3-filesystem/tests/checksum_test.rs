/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_filesystem::contract::FilesystemAdapter;
use aws_s3_filesystem::error::ErrorKind;
use aws_s3_filesystem::operation::checksum::ChecksumInput;
use aws_s3_filesystem::operation::file_metadata::FileMetadataInput;
use aws_s3_filesystem::{Client, Config};
use aws_sdk_s3::operation::head_object::{HeadObjectError, HeadObjectOutput};
use aws_sdk_s3::types::error::NotFound;
use aws_smithy_mocks::{mock, mock_client, RuleMode};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn adapter_with(s3_client: aws_sdk_s3::Client) -> Client {
    init_tracing();
    Client::new(
        Config::builder()
            .key("ANOTREAL")
            .secret("notrealsecret")
            .bucket("test-bucket")
            .prefix("pre/")
            .client(s3_client)
            .build()
            .unwrap(),
    )
}

#[tokio::test]
async fn checksum_strips_the_quotes_from_the_entity_tag() {
    let head_object_rule = mock!(aws_sdk_s3::Client::head_object)
        .match_requests(|r| {
            r.bucket.as_deref() == Some("test-bucket") && r.key.as_deref() == Some("pre/file.txt")
        })
        .then_output(|| {
            HeadObjectOutput::builder()
                .e_tag("\"6805f2cfc46c0f04559748bb039d69ae\"")
                .build()
        });
    let client = adapter_with(mock_client!(
        aws_sdk_s3,
        RuleMode::Sequential,
        &[&head_object_rule]
    ));

    let output = ChecksumInput::builder()
        .path("file.txt")
        .send_with(&client)
        .await
        .unwrap();
    assert_eq!(output.checksum(), "6805f2cfc46c0f04559748bb039d69ae");
}

#[tokio::test]
async fn explicit_etag_algo_is_accepted() {
    let head_object_rule = mock!(aws_sdk_s3::Client::head_object)
        .then_output(|| HeadObjectOutput::builder().e_tag("\"abc123\"").build());
    let client = adapter_with(mock_client!(
        aws_sdk_s3,
        RuleMode::Sequential,
        &[&head_object_rule]
    ));

    let output = ChecksumInput::builder()
        .path("file.txt")
        .checksum_algo("etag")
        .send_with(&client)
        .await
        .unwrap();
    assert_eq!(output.checksum(), "abc123");
}

#[tokio::test]
async fn non_etag_algorithms_are_rejected_without_a_request() {
    let client = Client::new(
        Config::builder()
            .key("ANOTREAL")
            .secret("notrealsecret")
            .region("us-west-2")
            .bucket("test-bucket")
            .build()
            .unwrap(),
    );

    let err = ChecksumInput::builder()
        .path("file.txt")
        .checksum_algo("sha256")
        .send_with(&client)
        .await
        .unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnsupportedChecksumAlgorithm {
            algo: "sha256".to_string()
        }
    );
}

#[tokio::test]
async fn missing_entity_tag_is_a_checksum_unavailable_error() {
    let head_object_rule = mock!(aws_sdk_s3::Client::head_object)
        .then_output(|| HeadObjectOutput::builder().content_length(42).build());
    let client = adapter_with(mock_client!(
        aws_sdk_s3,
        RuleMode::Sequential,
        &[&head_object_rule]
    ));

    let err = ChecksumInput::builder()
        .path("file.txt")
        .send_with(&client)
        .await
        .unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::ChecksumUnavailable {
            path: "file.txt".to_string()
        }
    );
    let source = std::error::Error::source(&err).unwrap();
    assert!(source.to_string().contains("entity tag not available"));
}

#[tokio::test]
async fn head_object_failure_surfaces_as_checksum_unavailable() {
    let head_object_rule = mock!(aws_sdk_s3::Client::head_object)
        .then_error(|| HeadObjectError::NotFound(NotFound::builder().build()));
    let client = adapter_with(mock_client!(
        aws_sdk_s3,
        RuleMode::Sequential,
        &[&head_object_rule]
    ));

    let err = ChecksumInput::builder()
        .path("file.txt")
        .send_with(&client)
        .await
        .unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::ChecksumUnavailable {
            path: "file.txt".to_string()
        }
    );

    // the metadata retrieval failure is preserved as the cause
    let cause = std::error::Error::source(&err)
        .and_then(|source| source.downcast_ref::<aws_s3_filesystem::error::Error>())
        .unwrap();
    assert_eq!(
        cause.kind(),
        &ErrorKind::MetadataRetrieval {
            path: "file.txt".to_string()
        }
    );
}

#[tokio::test]
async fn file_metadata_reports_head_object_fields() {
    let head_object_rule = mock!(aws_sdk_s3::Client::head_object)
        .match_requests(|r| r.key.as_deref() == Some("pre/dir/file.txt"))
        .then_output(|| {
            HeadObjectOutput::builder()
                .e_tag("\"abc123\"")
                .content_length(1024)
                .content_type("text/plain")
                .version_id("v7")
                .build()
        });
    let client = adapter_with(mock_client!(
        aws_sdk_s3,
        RuleMode::Sequential,
        &[&head_object_rule]
    ));

    let input = FileMetadataInput::builder().path("dir/file.txt").build().unwrap();
    let output = client.file_metadata(input).await.unwrap();
    assert_eq!(output.path(), "dir/file.txt");
    assert_eq!(output.e_tag(), Some("\"abc123\""));
    assert_eq!(output.content_length(), Some(1024));
    assert_eq!(output.content_type(), Some("text/plain"));
    assert_eq!(output.version_id(), Some("v7"));
}
