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

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{constants::*, Credential, CredentialError};
use edgesign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads EdgeGrid credentials from environment variables.
///
/// This provider looks for the following environment variables, in order:
/// - `AKAMAI_CLIENT_SECRET`: The client secret
/// - `AKAMAI_CLIENT_TOKEN`: The client token
/// - `AKAMAI_ACCESS_TOKEN`: The access token
/// - `AKAMAI_HOST`: The API host
///
/// An empty variable counts as missing. The provider reports itself expired
/// until a load has succeeded.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider {
    retrieved: AtomicBool,
}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }
}

fn required(ctx: &Context, key: &str, missing: CredentialError) -> Result<String> {
    match ctx.env_var(key) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing.into()),
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Self::Credential> {
        self.retrieved.store(false, Ordering::Release);

        let client_secret = required(
            ctx,
            AKAMAI_CLIENT_SECRET,
            CredentialError::ClientSecretNotFoundEnv,
        )?;
        let client_token = required(
            ctx,
            AKAMAI_CLIENT_TOKEN,
            CredentialError::ClientTokenNotFoundEnv,
        )?;
        let access_token = required(
            ctx,
            AKAMAI_ACCESS_TOKEN,
            CredentialError::AccessTokenNotFoundEnv,
        )?;
        let host = required(ctx, AKAMAI_HOST, CredentialError::HostNotFoundEnv)?;

        self.retrieved.store(true, Ordering::Release);
        Ok(
            Credential::new(client_secret, client_token, access_token, host)
                .with_provider_name(ENV_PROVIDER_NAME),
        )
    }

    fn is_expired(&self) -> bool {
        !self.retrieved.load(Ordering::Acquire)
    }
}
