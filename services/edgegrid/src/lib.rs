// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Akamai EdgeGrid signing for edgesign.
//!
//! This crate signs requests with the `EG1-HMAC-SHA256` scheme used by
//! Akamai's `{OPEN}` APIs.
//!
//! ## Example
//!
//! ```no_run
//! use edgesign_core::{Context, OsEnv, Signer};
//! use edgesign_edgegrid::{RequestSigner, SharedCredentialsProvider};
//! use edgesign_file_read_std::StdFileRead;
//!
//! # fn example() -> anyhow::Result<()> {
//! let ctx = Context::new().with_file_read(StdFileRead).with_env(OsEnv);
//! let provider = SharedCredentialsProvider::new().with_profile("papi");
//! let signer = Signer::new(ctx, provider, RequestSigner::new());
//!
//! let (mut parts, body) = http::Request::get(
//!     "https://akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx.luna.akamaiapis.net/papi/v1/contracts",
//! )
//! .body(Vec::new())?
//! .into_parts();
//! signer.sign(&mut parts, &body)?;
//! # Ok(())
//! # }
//! ```
//!
//! Credential failures carry a [`CredentialError`] that callers can match on.

pub mod constants;

mod credential;
pub use credential::Credential;

mod error;
pub use error::CredentialError;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::{
    auth_header_prefix, canonical_headers, canonical_path_query, content_hash, format_timestamp,
    new_nonce, signature, signing_key, string_to_sign, RequestSigner, SigningContext,
};
