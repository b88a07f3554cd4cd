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

use crate::{Context, CredentialCache, ProvideCredential, Result, SignRequest, SigningCredential};
use http::HeaderMap;
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// Cloned signers share the same credential cache, so a pool of workers can
/// sign concurrently while credentials are loaded at most once at a time.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    credentials: Arc<CredentialCache<K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self::with_cache(ctx, Arc::new(CredentialCache::new(provider)), builder)
    }

    /// Create a new signer on top of an existing credential cache.
    pub fn with_cache(
        ctx: Context,
        credentials: Arc<CredentialCache<K>>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            credentials,
            builder: Arc::new(builder),
        }
    }

    /// The credential cache used by this signer.
    pub fn credentials(&self) -> &CredentialCache<K> {
        &self.credentials
    }

    /// Sign the request.
    ///
    /// Credential errors are returned untouched and leave `req` as it was.
    /// On success the request carries its signature headers and a copy of
    /// the full header map is returned.
    pub fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<HeaderMap> {
        let credential = self.credentials.get(&self.ctx)?;
        self.builder
            .sign_request(&self.ctx, req, body, &credential)?;
        Ok(req.headers.clone())
    }
}
