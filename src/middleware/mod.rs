// ABOUTME: HTTP middleware for request tracing, request IDs, and CORS
// ABOUTME: Layers applied around every route by the server router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request spans and request ID handling
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{create_request_span, request_id_header, HttpMakeSpan, HttpOnResponse};
