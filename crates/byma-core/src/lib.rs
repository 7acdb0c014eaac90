/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! # byma-core
//!
//! Core types shared by the byma-* crates: configuration, the error type,
//! the endpoint selector, the resource allow-list and the parameter schema
//! table used to validate requests before they reach the network.

pub mod config;
pub mod error;
pub mod schema;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use schema::{validate_params, ParamSchema};
pub use types::{Endpoint, ResourcePath};

/// OAuth token endpoint for BYMADATA
pub const BYMA_AUTH_URL: &str = "https://api.bymadata.com.ar/auth/oauth/token";

/// Base URL for BYMADATA market data
pub const BYMA_BASE_URL: &str = "https://api.bymadata.com.ar/marketdata";

/// A token with this many seconds (or fewer) of validity left is refreshed
/// before the next request.
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// Request timeouts
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
