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

use crate::{Context, Result};
use chrono::{DateTime, Utc};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + 'static {
    /// Check if the credential is complete enough to sign with.
    fn is_valid(&self) -> bool;
}

/// ProvideCredential is the trait used by signer to load the credential.
///
/// Implementations decide on their own when a previously returned credential
/// goes stale. Errors are returned as is, providers never retry internally.
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Load the credential from its source.
    ///
    /// A credential is only returned when it is complete, an incomplete one
    /// is always reported as an error.
    fn provide_credential(&self, ctx: &Context) -> Result<Self::Credential>;

    /// Returns true if the credential is no longer valid and must be loaded again.
    ///
    /// This must be free of side effects and callable before the first
    /// `provide_credential`.
    fn is_expired(&self) -> bool;

    /// The time at which the last loaded credential stops being valid, if known.
    fn expires_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// SignRequest is the trait used by signer to sign the request.
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Credential used by this builder.
    type Credential: Send + Sync + 'static;

    /// Sign the request in place.
    ///
    /// `body` is the payload that will be sent with `req`. It is only
    /// borrowed, so the transport still owns the full, unconsumed body after
    /// signing.
    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: &Self::Credential,
    ) -> Result<()>;
}
