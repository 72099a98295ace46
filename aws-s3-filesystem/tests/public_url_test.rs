/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_filesystem::error::ErrorKind;
use aws_s3_filesystem::operation::public_url::PublicUrlInput;
use aws_s3_filesystem::{Client, Config};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn test_config() -> aws_s3_filesystem::config::Builder {
    init_tracing();
    Config::builder()
        .key("ANOTREAL")
        .secret("notrealsecret")
        .bucket("b")
}

#[tokio::test]
async fn prefixed_path_style_url_against_custom_endpoint() {
    let client = Client::new(
        test_config()
            .prefix("pre/")
            .endpoint("https://storage.example.com")
            .path_style_endpoint(true)
            .build()
            .unwrap(),
    );

    let output = PublicUrlInput::builder()
        .path("file.txt")
        .send_with(&client)
        .await
        .unwrap();
    assert_eq!(output.url(), "https://storage.example.com/b/pre/file.txt");
}

#[tokio::test]
async fn virtual_hosted_url_against_default_regional_endpoint() {
    let client = Client::new(test_config().region("eu-central-1").build().unwrap());

    let output = PublicUrlInput::builder()
        .path("dir/file.txt")
        .send_with(&client)
        .await
        .unwrap();
    assert_eq!(
        output.url(),
        "https://b.s3.eu-central-1.amazonaws.com/dir/file.txt"
    );
}

#[tokio::test]
async fn base_url_overrides_endpoint_and_region() {
    let client = Client::new(
        test_config()
            .prefix("pre/")
            .base_url("https://cdn.example.com")
            .endpoint("https://storage.example.com")
            .region("us-east-1")
            .build()
            .unwrap(),
    );

    let output = PublicUrlInput::builder()
        .path("file.txt")
        .send_with(&client)
        .await
        .unwrap();
    assert_eq!(output.url(), "https://cdn.example.com/pre/file.txt");
}

#[tokio::test]
async fn unresolvable_endpoint_wraps_the_cause_with_the_path() {
    let client = Client::new(test_config().build().unwrap());

    let err = PublicUrlInput::builder()
        .path("file.txt")
        .send_with(&client)
        .await
        .unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::PublicUrlGeneration {
            path: "file.txt".to_string()
        }
    );
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn missing_path_is_an_input_error() {
    let client = Client::new(test_config().region("us-east-1").build().unwrap());

    let err = PublicUrlInput::builder()
        .send_with(&client)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InputInvalid);
}
