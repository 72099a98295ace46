/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::get_object::builders::{GetObjectFluentBuilder, GetObjectInputBuilder};

/// Copy caller supplied `GetObject` options onto the request builder.
///
/// Bucket and key are copied here like any other field; the orchestration
/// overrides them afterwards so the resolved location always wins.
pub(crate) fn apply_get_object_options(
    request: GetObjectFluentBuilder,
    options: Option<&GetObjectInputBuilder>,
) -> GetObjectFluentBuilder {
    let options = match options {
        Some(options) => options,
        None => return request,
    };

    request
        .set_bucket(options.get_bucket().clone())
        .set_if_match(options.get_if_match().clone())
        .set_if_modified_since(options.get_if_modified_since().clone())
        .set_if_none_match(options.get_if_none_match().clone())
        .set_if_unmodified_since(options.get_if_unmodified_since().clone())
        .set_key(options.get_key().clone())
        .set_range(options.get_range().clone())
        .set_response_cache_control(options.get_response_cache_control().clone())
        .set_response_content_disposition(options.get_response_content_disposition().clone())
        .set_response_content_encoding(options.get_response_content_encoding().clone())
        .set_response_content_language(options.get_response_content_language().clone())
        .set_response_content_type(options.get_response_content_type().clone())
        .set_response_expires(options.get_response_expires().clone())
        .set_version_id(options.get_version_id().clone())
        .set_sse_customer_algorithm(options.get_sse_customer_algorithm().clone())
        .set_sse_customer_key(options.get_sse_customer_key().clone())
        .set_sse_customer_key_md5(options.get_sse_customer_key_md5().clone())
        .set_request_payer(options.get_request_payer().clone())
        .set_part_number(options.get_part_number().clone())
        .set_expected_bucket_owner(options.get_expected_bucket_owner().clone())
        .set_checksum_mode(options.get_checksum_mode().clone())
}
