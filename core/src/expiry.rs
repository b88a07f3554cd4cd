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

use chrono::{DateTime, TimeDelta, Utc};

/// Expiry keeps track of when a time-bounded credential must be loaded again.
///
/// Providers whose credentials carry a lifetime embed an `Expiry` and
/// forward `is_expired` / `expires_at` to it. An `Expiry` that was never set
/// is expired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expiry {
    expiration: Option<DateTime<Utc>>,
}

impl Expiry {
    /// Set the expiration time.
    ///
    /// A positive `window` moves the expiration earlier, so that a
    /// credential is refreshed before the remote side starts rejecting it.
    pub fn set_expiration(&mut self, expiration: DateTime<Utc>, window: TimeDelta) {
        let expiration = if window > TimeDelta::zero() {
            expiration
                .checked_sub_signed(window)
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        } else {
            expiration
        };
        self.expiration = Some(expiration);
    }

    /// Returns true if the expiration time has passed.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns true if the expiration time is before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expiration {
            Some(expiration) => expiration < now,
            None => true,
        }
    }

    /// The expiration time, if set.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expiration
    }
}
