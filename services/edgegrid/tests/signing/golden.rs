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

use super::init_signing_test;
use anyhow::Result;
use edgesign_core::SignRequest;
use edgesign_edgegrid::SigningContext;
use http::header::AUTHORIZATION;
use pretty_assertions::assert_eq;

#[test]
fn test_golden_vectors() -> Result<()> {
    let (ctx, data) = init_signing_test()?;
    let credential = data.credential();

    for case in &data.tests {
        let mut signer = data.signer();
        if let Some(max_body) = case.max_body {
            signer = signer.with_max_body(max_body);
        }
        if let Some(headers) = &case.headers_to_sign {
            signer = signer.with_headers_to_sign(headers);
        }

        let (mut parts, body) = case.request.build(&data.base_url)?;
        signer.sign_request(&ctx, &mut parts, &body, &credential)?;

        let actual = parts
            .headers
            .get(AUTHORIZATION)
            .expect("authorization must be set")
            .to_str()?;
        assert_eq!(actual, case.expected, "case: {}", case.name);
    }
    Ok(())
}

#[test]
fn test_simple_get_string_to_sign() -> Result<()> {
    let (_, data) = init_signing_test()?;
    let case = data
        .tests
        .iter()
        .find(|c| c.name == "simple GET")
        .expect("simple GET must exist");

    let (parts, body) = case.request.build(&data.base_url)?;
    let signing = SigningContext::build(&parts, &body, &data.credential(), &data.signer())?;

    assert_eq!(
        signing.string_to_sign(),
        "GET\thttps\takaa-baseurl-xxxxxxxxxxx-xxxxxxxxxxxxx.luna.akamaiapis.net\t/\t\t\t\
         EG1-HMAC-SHA256 client_token=akab-client-token-xxx-xxxxxxxxxxxxxxxx;\
         access_token=akab-access-token-xxx-xxxxxxxxxxxxxxxx;\
         timestamp=20140321T19:34:21+0000;nonce=nonce-xx-xxxx-xxxx-xxxx-xxxxxxxxxxxx;"
    );
    assert_eq!(signing.authorization(), case.expected);
    Ok(())
}

#[test]
fn test_header_canonicalization() -> Result<()> {
    let (_, data) = init_signing_test()?;
    let case = data
        .tests
        .iter()
        .find(|c| c.name == "header containing spaces")
        .expect("case must exist");

    let (parts, body) = case.request.build(&data.base_url)?;
    let signing = SigningContext::build(&parts, &body, &data.credential(), &data.signer())?;

    assert_eq!(
        signing.canonical_headers(),
        "x-test1:\" first-value \"\tx-test2:test header with spaces"
    );
    Ok(())
}

#[test]
fn test_percent_encoded_path() -> Result<()> {
    let (_, data) = init_signing_test()?;
    let case = data
        .tests
        .iter()
        .find(|c| c.name == "percent-encoded path")
        .expect("case must exist");

    let (parts, body) = case.request.build(&data.base_url)?;
    let signing = SigningContext::build(&parts, &body, &data.credential(), &data.signer())?;

    assert_eq!(
        signing.path_query(),
        "/testapi/v1/t space/caf\u{e9}?q=a%20b&r=%2F"
    );
    assert_eq!(signing.authorization(), case.expected);
    Ok(())
}
