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

use std::fmt::{Debug, Formatter};

use edgesign_core::{utils::Redact, SigningCredential};

/// Credential for EdgeGrid.
///
/// A credential is never edited after a provider built it, a refresh
/// replaces it as a whole.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    /// Client secret, the HMAC key material.
    pub client_secret: String,
    /// Client token.
    pub client_token: String,
    /// Access token.
    pub access_token: String,
    /// API host, authority only without scheme.
    pub host: String,
    /// Name of the provider that loaded this credential.
    pub provider_name: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(
        client_secret: impl Into<String>,
        client_token: impl Into<String>,
        access_token: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            client_secret: client_secret.into(),
            client_token: client_token.into(),
            access_token: access_token.into(),
            host: host.into(),
            provider_name: String::new(),
        }
    }

    /// Set the provider name.
    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = name.into();
        self
    }

    /// Base url of the API this credential belongs to.
    pub fn endpoint(&self) -> String {
        format!("https://{}", self.host.trim_end_matches('/'))
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("client_secret", &Redact::from(&self.client_secret))
            .field("client_token", &Redact::from(&self.client_token))
            .field("access_token", &Redact::from(&self.access_token))
            .field("host", &self.host)
            .field("provider_name", &self.provider_name)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.client_secret.is_empty()
            && !self.client_token.is_empty()
            && !self.access_token.is_empty()
            && !self.host.is_empty()
    }
}
