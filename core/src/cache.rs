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

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use log::debug;

use crate::{Context, ProvideCredential, Result, SigningCredential};

/// CredentialCache provides concurrency safe retrieval of credentials.
///
/// The cache wraps exactly one provider. Callers that find a fresh credential
/// only take the read lock. Loading always happens under the write lock, and
/// expiry is checked again once it is held, so any number of callers that
/// observe an expired cache at the same moment cause a single
/// `provide_credential` call.
#[derive(Debug)]
pub struct CredentialCache<K: SigningCredential> {
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    state: RwLock<CacheState<K>>,
}

#[derive(Debug)]
struct CacheState<K> {
    credential: Option<K>,
    force_refresh: bool,
}

impl<K: SigningCredential> CredentialCache<K> {
    /// Create a new cache around the provider.
    ///
    /// The cache starts expired, the first `get` always loads.
    pub fn new(provider: impl ProvideCredential<Credential = K>) -> Self {
        Self::from_arc(Arc::new(provider))
    }

    /// Create a new cache around an already shared provider.
    pub fn from_arc(provider: Arc<dyn ProvideCredential<Credential = K>>) -> Self {
        Self {
            provider,
            state: RwLock::new(CacheState {
                credential: None,
                force_refresh: true,
            }),
        }
    }

    /// Returns the cached credential, loading it from the provider if expired.
    ///
    /// On provider failure the provider's error is returned as is, the
    /// previously cached credential is dropped and the cache stays expired so
    /// that the next call tries again.
    pub fn get(&self, ctx: &Context) -> Result<K> {
        {
            let state = self.read();
            if let Some(cred) = self.fresh(&state) {
                return Ok(cred.clone());
            }
        }

        let mut state = self.write();
        // Another caller may have loaded while we waited for the write lock.
        if let Some(cred) = self.fresh(&state) {
            return Ok(cred.clone());
        }

        debug!("credential expired, loading from {:?}", self.provider);
        match self.provider.provide_credential(ctx) {
            Ok(cred) => {
                state.credential = Some(cred.clone());
                state.force_refresh = false;
                Ok(cred)
            }
            Err(err) => {
                state.credential = None;
                state.force_refresh = true;
                Err(err)
            }
        }
    }

    /// Expire the cached credential.
    ///
    /// The next `get` loads from the provider no matter what the provider
    /// itself thinks about expiry.
    pub fn expire(&self) {
        self.write().force_refresh = true;
    }

    /// Returns true if the next `get` will load from the provider.
    pub fn is_expired(&self) -> bool {
        let state = self.read();
        state.force_refresh || self.provider.is_expired()
    }

    /// The time at which the cached credential expires.
    ///
    /// Returns `None` if the provider can't tell. A cache expired via
    /// [`CredentialCache::expire`] reports the distant past.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let state = self.read();
        let at = self.provider.expires_at()?;
        if state.force_refresh {
            return Some(DateTime::<Utc>::MIN_UTC);
        }
        Some(at)
    }

    fn fresh<'a>(&self, state: &'a CacheState<K>) -> Option<&'a K> {
        if state.force_refresh || self.provider.is_expired() {
            return None;
        }
        state.credential.as_ref()
    }

    // The state is only ever replaced field by field without intermediate
    // panics, a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, CacheState<K>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheState<K>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
