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

//! EdgeGrid request signing.
//!
//! The signature covers, joined by tabs:
//!
//! ```text
//! POST
//! https
//! akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx.luna.akamaiapis.net
//! /papi/v1/properties?contractId=ctr_1
//! x-custom:value
//! <base64 sha256 of the body>
//! EG1-HMAC-SHA256 client_token=...;access_token=...;timestamp=...;nonce=...;
//! ```

use crate::{constants::*, Credential};
use chrono::{DateTime, Utc};
use edgesign_core::hash::{base64_hmac_sha256, base64_sha256};
use edgesign_core::{Context, Error, Result, SignRequest};
use http::header::AUTHORIZATION;
use http::request::Parts;
use http::{HeaderMap, HeaderValue, Method, Uri};
use log::debug;
use percent_encoding::percent_decode_str;

/// RequestSigner that implements EdgeGrid `EG1-HMAC-SHA256` signing.
///
/// - [Authenticate with EdgeGrid](https://techdocs.akamai.com/developer/docs/authenticate-with-edgegrid)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    headers_to_sign: Vec<String>,
    max_body: usize,

    timestamp: Option<String>,
    nonce: Option<String>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a new EdgeGrid signer that signs no extra headers.
    pub fn new() -> Self {
        Self {
            headers_to_sign: Vec::new(),
            max_body: DEFAULT_MAX_BODY,

            timestamp: None,
            nonce: None,
        }
    }

    /// Set the header names that take part in the signature.
    ///
    /// Names are matched case-insensitively. The API client and the server
    /// must agree on this list.
    pub fn with_headers_to_sign<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.headers_to_sign = headers
            .into_iter()
            .map(|h| h.as_ref().to_ascii_lowercase())
            .collect();
        self
    }

    /// Set the largest prefix of a POST body that is hashed. Defaults to 131072.
    ///
    /// `0` is taken literally: a POST body is then hashed as if it were
    /// empty, it does not fall back to the default.
    pub fn with_max_body(mut self, max_body: usize) -> Self {
        self.max_body = max_body;
        self
    }

    /// Specify the signing timestamp, in `20140321T19:34:21+0000` form.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// Every request must carry a fresh nonce.
    /// Only use this function for testing.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: &Self::Credential,
    ) -> Result<()> {
        let signing = SigningContext::build(req, body, credential, self)?;
        debug!("calculated string to sign: {}", signing.string_to_sign());

        let mut authorization = HeaderValue::from_str(signing.authorization())?;
        authorization.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, authorization);
        Ok(())
    }
}

/// Every intermediate value of signing one request.
///
/// A context is built once per request and never reused.
#[derive(Debug, Clone)]
pub struct SigningContext {
    timestamp: String,
    nonce: String,
    path_query: String,
    canonical_headers: String,
    content_hash: String,
    auth_header: String,
    string_to_sign: String,
    authorization: String,
}

impl SigningContext {
    /// Compute the signature of `parts` with `body` as its payload.
    pub fn build(
        parts: &Parts,
        body: &[u8],
        credential: &Credential,
        signer: &RequestSigner,
    ) -> Result<Self> {
        let scheme = parts
            .uri
            .scheme_str()
            .ok_or_else(|| Error::request_invalid("request uri has no scheme"))?;
        let host = authority(&parts.uri)
            .ok_or_else(|| Error::request_invalid("request uri has no authority"))?;

        let timestamp = signer
            .timestamp
            .clone()
            .unwrap_or_else(|| format_timestamp(Utc::now()));
        let nonce = signer.nonce.clone().unwrap_or_else(new_nonce);

        let path_query = canonical_path_query(&parts.uri);
        let canonical_headers = canonical_headers(&parts.headers, &signer.headers_to_sign);
        let content_hash = content_hash(&parts.method, body, signer.max_body);
        let auth_header = auth_header_prefix(
            &credential.client_token,
            &credential.access_token,
            &timestamp,
            &nonce,
        );

        let key = signing_key(&credential.client_secret, &timestamp);
        let string_to_sign = string_to_sign(
            parts.method.as_str(),
            scheme,
            &host,
            &path_query,
            &canonical_headers,
            &content_hash,
            &auth_header,
        );
        let authorization = format!(
            "{auth_header}signature={}",
            signature(&key, &string_to_sign)
        );

        Ok(Self {
            timestamp,
            nonce,
            path_query,
            canonical_headers,
            content_hash,
            auth_header,
            string_to_sign,
            authorization,
        })
    }

    /// Timestamp used for this request.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Nonce used for this request.
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Path plus raw query.
    pub fn path_query(&self) -> &str {
        &self.path_query
    }

    /// Tab separated `name:value` list of signed headers.
    pub fn canonical_headers(&self) -> &str {
        &self.canonical_headers
    }

    /// Body hash, empty unless the request is a POST with a body.
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// Authorization value without the signature.
    pub fn auth_header(&self) -> &str {
        &self.auth_header
    }

    /// The exact data that was signed.
    pub fn string_to_sign(&self) -> &str {
        &self.string_to_sign
    }

    /// Full `Authorization` header value.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }
}

/// Host and optional port, without user info.
fn authority(uri: &Uri) -> Option<String> {
    let authority = uri.authority()?;
    Some(match authority.port() {
        Some(port) => format!("{}:{}", authority.host(), port.as_str()),
        None => authority.host().to_string(),
    })
}

/// Format time in the EdgeGrid timestamp form, always in UTC.
pub fn format_timestamp(t: DateTime<Utc>) -> String {
    t.format("%Y%m%dT%H:%M:%S+0000").to_string()
}

/// A fresh random nonce.
pub fn new_nonce() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// `path`, or `path?query` when the raw query is not empty.
///
/// The path is percent-decoded, the query is kept exactly as sent.
pub fn canonical_path_query(uri: &Uri) -> String {
    let path = percent_decode_str(uri.path()).decode_utf8_lossy();
    match uri.query() {
        Some(query) if !query.is_empty() => format!("{path}?{query}"),
        _ => path.into_owned(),
    }
}

/// Canonicalize the headers listed in `headers_to_sign`.
///
/// Names are ordered by their `Title-Case` form and written lowercased.
/// Values are trimmed, inner whitespace runs are collapsed to a single
/// space and the result is lowercased. Headers absent from the request are
/// skipped.
pub fn canonical_headers(headers: &HeaderMap, headers_to_sign: &[String]) -> String {
    let mut names: Vec<String> = headers_to_sign
        .iter()
        .map(|name| name.to_ascii_lowercase())
        .filter(|name| headers.contains_key(name.as_str()))
        .collect();
    names.sort_by_cached_key(|name| title_case(name));
    names.dedup();

    names
        .iter()
        .filter_map(|name| {
            let value = headers.get(name.as_str())?;
            let value = String::from_utf8_lossy(value.as_bytes());
            let value = value.split_whitespace().collect::<Vec<_>>().join(" ");
            Some(format!("{name}:{}", value.to_lowercase()))
        })
        .collect::<Vec<_>>()
        .join("\t")
}

/// `content-type` becomes `Content-Type`.
fn title_case(name: &str) -> String {
    let mut upper = true;
    name.chars()
        .map(|c| {
            let c = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            c
        })
        .collect()
}

/// Base64 SHA-256 of at most `max_body` bytes of a POST body.
///
/// Empty for every other method and for an empty body.
pub fn content_hash(method: &Method, body: &[u8], max_body: usize) -> String {
    if method != Method::POST || body.is_empty() {
        return String::new();
    }
    base64_sha256(&body[..body.len().min(max_body)])
}

/// Authorization value up to and including the `;` before `signature=`.
pub fn auth_header_prefix(
    client_token: &str,
    access_token: &str,
    timestamp: &str,
    nonce: &str,
) -> String {
    format!(
        "{EDGEGRID_ALGORITHM} client_token={client_token};access_token={access_token};timestamp={timestamp};nonce={nonce};"
    )
}

/// Per-request signing key, derived from the client secret and timestamp.
pub fn signing_key(client_secret: &str, timestamp: &str) -> String {
    base64_hmac_sha256(client_secret.as_bytes(), timestamp.as_bytes())
}

/// Join the signed fields with tabs.
pub fn string_to_sign(
    method: &str,
    scheme: &str,
    host: &str,
    path_query: &str,
    canonical_headers: &str,
    content_hash: &str,
    auth_header: &str,
) -> String {
    [
        method,
        scheme,
        host,
        path_query,
        canonical_headers,
        content_hash,
        auth_header,
    ]
    .join("\t")
}

/// Base64 HMAC-SHA256 of `string_to_sign`, keyed by the text of the signing key.
pub fn signature(signing_key: &str, string_to_sign: &str) -> String {
    base64_hmac_sha256(signing_key.as_bytes(), string_to_sign.as_bytes())
}
