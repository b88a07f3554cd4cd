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

//! Core components for signing API requests.
//!
//! This crate provides the foundational types and traits for the edgesign ecosystem.
//! Service crates such as `edgesign-edgegrid` build on top of it.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for file reading and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **CredentialCache**: Concurrency safe, lazily refreshed holder of one provider's credential
//! - **Signer**: The main orchestrator that coordinates credential loading and request signing
//!
//! Everything is synchronous and runs on the caller's thread.
//!
//! ## Example
//!
//! ```no_run
//! use edgesign_core::{Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     token: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.token.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     fn provide_credential(&self, _: &Context) -> Result<Self::Credential> {
//!         Ok(MyCredential {
//!             token: "my-token".to_string(),
//!         })
//!     }
//!
//!     fn is_expired(&self) -> bool {
//!         false
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut http::request::Parts,
//!         _body: &[u8],
//!         cred: &Self::Credential,
//!     ) -> Result<()> {
//!         req.headers
//!             .insert(http::header::AUTHORIZATION, cred.token.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # fn example() -> anyhow::Result<()> {
//! let signer = Signer::new(Context::new(), MyProvider, MyBuilder);
//!
//! let (mut parts, body) = http::Request::get("https://example.com")
//!     .body(Vec::new())?
//!     .into_parts();
//! signer.sign(&mut parts, &body)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, FileRead, NoopEnv, NoopFileRead, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod cache;
pub use cache::CredentialCache;
mod expiry;
pub use expiry::Expiry;
mod signer;
pub use signer::Signer;
