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
use ini::{Ini, Properties};
use log::debug;

/// SharedCredentialsProvider loads EdgeGrid credentials from an `.edgerc` file.
///
/// The file is an ini document with one section per profile:
///
/// ```ini
/// [default]
/// client_secret = xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx=
/// host = akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx.luna.akamaiapis.net
/// access_token = akab-access-token-xxx-xxxxxxxxxxxxxxxx
/// client_token = akab-client-token-xxx-xxxxxxxxxxxxxxxx
/// ```
///
/// The file path is resolved in order:
/// - the path set by [`SharedCredentialsProvider::with_file`]
/// - `AKAMAI_ENVRC_FILE`
/// - `~/.edgerc`
///
/// The profile is resolved the same way from
/// [`SharedCredentialsProvider::with_profile`], `AKAMAI_PROFILE` and `default`.
#[derive(Debug, Default)]
pub struct SharedCredentialsProvider {
    file: Option<String>,
    profile: Option<String>,
    retrieved: AtomicBool,
}

impl SharedCredentialsProvider {
    /// Create a new SharedCredentialsProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path of the credentials file.
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Set the profile to load.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    fn resolve_path(&self, ctx: &Context) -> Result<String> {
        let path = match &self.file {
            Some(path) => path.clone(),
            None => ctx
                .env_var(AKAMAI_ENVRC_FILE)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_EDGERC_PATH.to_string()),
        };

        ctx.expand_home_dir(&path)
            .ok_or_else(|| CredentialError::HomeDirNotFound.into())
    }

    fn resolve_profile(&self, ctx: &Context) -> String {
        match &self.profile {
            Some(profile) => profile.clone(),
            None => ctx
                .env_var(AKAMAI_PROFILE)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PROFILE.to_string()),
        }
    }

    fn load(&self, ctx: &Context) -> Result<Credential> {
        let path = self.resolve_path(ctx)?;
        let profile = self.resolve_profile(ctx);
        debug!("loading edgegrid credential from {path} with profile {profile}");

        let content = ctx.file_read_as_string(&path).map_err(|_| {
            CredentialError::SharedCredentialsFileNotFound { path: path.clone() }
        })?;
        let conf = Ini::load_from_str(&content)
            .map_err(|_| CredentialError::SharedCredentialsFileInvalid { path: path.clone() })?;
        let props = conf
            .section(Some(profile.as_str()))
            .ok_or_else(|| CredentialError::SharedCredentialsProfileNotFound {
                profile: profile.clone(),
            })?;

        let client_secret = required(
            props,
            EDGERC_CLIENT_SECRET,
            CredentialError::ClientSecretNotFoundFile,
        )?;
        let client_token = required(
            props,
            EDGERC_CLIENT_TOKEN,
            CredentialError::ClientTokenNotFoundFile,
        )?;
        let access_token = required(
            props,
            EDGERC_ACCESS_TOKEN,
            CredentialError::AccessTokenNotFoundFile,
        )?;
        let host = required(props, EDGERC_HOST, CredentialError::HostNotFoundFile)?;

        Ok(
            Credential::new(client_secret, client_token, access_token, host)
                .with_provider_name(SHARED_CREDENTIALS_PROVIDER_NAME),
        )
    }
}

fn required(props: &Properties, key: &str, missing: CredentialError) -> Result<String> {
    match props.get(key) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(missing.into()),
    }
}

impl ProvideCredential for SharedCredentialsProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Self::Credential> {
        self.retrieved.store(false, Ordering::Release);
        let cred = self.load(ctx)?;
        self.retrieved.store(true, Ordering::Release);
        Ok(cred)
    }

    fn is_expired(&self) -> bool {
        !self.retrieved.load(Ordering::Acquire)
    }
}
