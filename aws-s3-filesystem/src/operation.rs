/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for single object public URL generation
pub mod public_url;

/// Types for single object checksum retrieval
pub mod checksum;

/// Types for single object temporary (presigned) URL generation
pub mod temporary_url;

/// Types for single object metadata retrieval
pub mod file_metadata;
