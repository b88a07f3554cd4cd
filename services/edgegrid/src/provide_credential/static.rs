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

use crate::{constants::*, Credential, CredentialError};
use edgesign_core::{Context, ProvideCredential, Result, SigningCredential};

/// StaticCredentialProvider returns a fixed credential supplied by the caller.
///
/// The credential never expires. If any of its fields is empty, every load
/// fails with [`CredentialError::StaticCredentialsEmpty`].
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider.
    pub fn new(
        client_secret: impl Into<String>,
        client_token: impl Into<String>,
        access_token: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self::from_credential(Credential::new(
            client_secret,
            client_token,
            access_token,
            host,
        ))
    }

    /// Create a new StaticCredentialProvider from a complete credential.
    ///
    /// A blank provider name is replaced by `StaticProvider`.
    pub fn from_credential(mut credential: Credential) -> Self {
        if credential.provider_name.is_empty() {
            credential.provider_name = STATIC_PROVIDER_NAME.to_string();
        }
        Self { credential }
    }
}

impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _: &Context) -> Result<Self::Credential> {
        if !self.credential.is_valid() {
            return Err(CredentialError::StaticCredentialsEmpty.into());
        }
        Ok(self.credential.clone())
    }

    fn is_expired(&self) -> bool {
        false
    }
}
