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

use edgesign_core::{Error, ErrorKind};
use thiserror::Error;

/// Named failures of the EdgeGrid credential providers.
///
/// Every provider error carries one of these as its source:
///
/// ```
/// use edgesign_edgegrid::CredentialError;
///
/// # fn handle(err: edgesign_core::Error) {
/// match err.downcast_ref::<CredentialError>() {
///     Some(CredentialError::HostNotFoundEnv) => eprintln!("please export AKAMAI_HOST"),
///     Some(other) => eprintln!("credential setup is broken: {other}"),
///     None => eprintln!("signing failed: {err}"),
/// }
/// # }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// A static credential has an empty field.
    #[error("EmptyStaticCreds: static credentials are empty")]
    StaticCredentialsEmpty,

    /// `AKAMAI_CLIENT_SECRET` is unset or empty.
    #[error("AKAMAI_CLIENT_SECRET not found in environment")]
    ClientSecretNotFoundEnv,
    /// `AKAMAI_CLIENT_TOKEN` is unset or empty.
    #[error("AKAMAI_CLIENT_TOKEN not found in environment")]
    ClientTokenNotFoundEnv,
    /// `AKAMAI_ACCESS_TOKEN` is unset or empty.
    #[error("AKAMAI_ACCESS_TOKEN not found in environment")]
    AccessTokenNotFoundEnv,
    /// `AKAMAI_HOST` is unset or empty.
    #[error("AKAMAI_HOST not found in environment")]
    HostNotFoundEnv,

    /// The default edgerc location needs a home directory.
    #[error("could not find user's homedir")]
    HomeDirNotFound,
    /// The edgerc file can't be read.
    #[error("edgerc file {path} not found")]
    SharedCredentialsFileNotFound {
        /// Path that was tried.
        path: String,
    },
    /// The edgerc file is not a valid ini document.
    #[error("edgerc file {path} is not a valid ini file")]
    SharedCredentialsFileInvalid {
        /// Path that was tried.
        path: String,
    },
    /// The edgerc file has no section for the profile.
    #[error("could not load profile {profile} from edgerc")]
    SharedCredentialsProfileNotFound {
        /// Profile that was looked up.
        profile: String,
    },
    /// `client_secret` is missing or empty in the profile.
    #[error("client_secret not found in edgerc")]
    ClientSecretNotFoundFile,
    /// `client_token` is missing or empty in the profile.
    #[error("client_token not found in edgerc")]
    ClientTokenNotFoundFile,
    /// `access_token` is missing or empty in the profile.
    #[error("access_token not found in edgerc")]
    AccessTokenNotFoundFile,
    /// `host` is missing or empty in the profile.
    #[error("host not found in edgerc")]
    HostNotFoundFile,
}

impl CredentialError {
    /// The coarse error kind this failure maps to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CredentialError::StaticCredentialsEmpty => ErrorKind::CredentialInvalid,
            CredentialError::HomeDirNotFound
            | CredentialError::SharedCredentialsFileNotFound { .. }
            | CredentialError::SharedCredentialsProfileNotFound { .. } => ErrorKind::ConfigNotFound,
            _ => ErrorKind::ConfigInvalid,
        }
    }
}

impl From<CredentialError> for Error {
    fn from(err: CredentialError) -> Self {
        Error::new(err.kind(), err.to_string()).with_source(err)
    }
}
