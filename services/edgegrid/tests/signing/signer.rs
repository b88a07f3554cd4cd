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

use super::{init_signing_test, TestData};
use anyhow::Result;
use edgesign_core::{Context, CredentialCache, ErrorKind, Signer, StaticEnv};
use edgesign_edgegrid::{
    constants::*, CredentialError, EnvCredentialProvider, RequestSigner, StaticCredentialProvider,
};
use http::header::AUTHORIZATION;
use pretty_assertions::assert_eq;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread;

fn static_provider(data: &TestData) -> StaticCredentialProvider {
    StaticCredentialProvider::from_credential(data.credential())
}

fn post_request(data: &TestData) -> Result<(http::request::Parts, Vec<u8>)> {
    Ok(
        http::Request::post(format!("{}/testapi/v1/t3", data.base_url))
            .body(b"datadatadatadatadatadatadatadata".to_vec())?
            .into_parts(),
    )
}

#[test]
fn test_signer_is_deterministic() -> Result<()> {
    let (ctx, data) = init_signing_test()?;
    let signer = Signer::new(ctx, static_provider(&data), data.signer());

    let (mut first, body) = post_request(&data)?;
    let (mut second, _) = post_request(&data)?;
    let first = signer.sign(&mut first, &body)?;
    let second = signer.sign(&mut second, &body)?;

    assert_eq!(first.get(AUTHORIZATION), second.get(AUTHORIZATION));
    assert!(first
        .get(AUTHORIZATION)
        .expect("authorization must be set")
        .to_str()?
        .ends_with("signature=hXm4iCxtpN22m4cbZb4lVLW5rhX8Ca82vCFqXzSTPe4="));
    Ok(())
}

#[test]
fn test_signer_keeps_body() -> Result<()> {
    let (ctx, data) = init_signing_test()?;
    let signer = Signer::new(ctx, static_provider(&data), data.signer().with_max_body(4));

    let (mut parts, body) = post_request(&data)?;
    signer.sign(&mut parts, &body)?;

    // Only a prefix is hashed, the full body is still sent.
    let req = http::Request::from_parts(parts, body);
    assert_eq!(req.body().as_slice(), b"datadatadatadatadatadatadatadata");
    assert!(req.headers().contains_key(AUTHORIZATION));
    Ok(())
}

#[test]
fn test_signer_fresh_nonce_per_request() -> Result<()> {
    let (ctx, data) = init_signing_test()?;
    let signer = Signer::new(
        ctx,
        static_provider(&data),
        RequestSigner::new().with_headers_to_sign(["X-Test1"]),
    );

    let headers = (0..10)
        .map(|_| -> Result<String> {
            let (mut parts, body) = post_request(&data)?;
            let headers = signer.sign(&mut parts, &body)?;
            Ok(headers
                .get(AUTHORIZATION)
                .expect("authorization must be set")
                .to_str()?
                .to_string())
        })
        .collect::<Result<HashSet<_>>>()?;

    assert_eq!(headers.len(), 10);
    Ok(())
}

#[test]
fn test_signer_static_empty_secret() -> Result<()> {
    let (ctx, data) = init_signing_test()?;
    let provider = StaticCredentialProvider::new(
        "",
        &data.client_token,
        &data.access_token,
        "akaa-baseurl-xxxxxxxxxxx-xxxxxxxxxxxxx.luna.akamaiapis.net",
    );
    let signer = Signer::new(ctx, provider, data.signer());

    let (mut parts, body) = post_request(&data)?;
    let err = signer
        .sign(&mut parts, &body)
        .expect_err("empty secret must fail");

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(err.is_config_error());
    assert_eq!(
        err.downcast_ref::<CredentialError>(),
        Some(&CredentialError::StaticCredentialsEmpty)
    );
    assert!(parts.headers.get(AUTHORIZATION).is_none());
    Ok(())
}

fn env_context(envs: &[(&str, &str)]) -> Context {
    Context::new().with_env(StaticEnv {
        home_dir: None,
        envs: envs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    })
}

#[test]
fn test_env_missing_host_then_fixed() -> Result<()> {
    let (_, data) = init_signing_test()?;
    let mut envs = vec![
        (AKAMAI_CLIENT_SECRET, data.client_secret.as_str()),
        (AKAMAI_CLIENT_TOKEN, data.client_token.as_str()),
        (AKAMAI_ACCESS_TOKEN, data.access_token.as_str()),
    ];
    let cache = CredentialCache::new(EnvCredentialProvider::new());

    let err = cache
        .get(&env_context(&envs))
        .expect_err("missing host must fail");
    assert_eq!(
        err.downcast_ref::<CredentialError>(),
        Some(&CredentialError::HostNotFoundEnv)
    );
    assert!(cache.is_expired());

    envs.push((
        AKAMAI_HOST,
        "akaa-baseurl-xxxxxxxxxxx-xxxxxxxxxxxxx.luna.akamaiapis.net",
    ));
    let cred = cache.get(&env_context(&envs))?;
    assert_eq!(cred.provider_name, "EnvProvider");
    assert!(!cache.is_expired());
    Ok(())
}

#[test]
fn test_shared_signer_across_threads() -> Result<()> {
    let (_, data) = init_signing_test()?;
    let ctx = env_context(&[
        (AKAMAI_CLIENT_SECRET, data.client_secret.as_str()),
        (AKAMAI_CLIENT_TOKEN, data.client_token.as_str()),
        (AKAMAI_ACCESS_TOKEN, data.access_token.as_str()),
        (
            AKAMAI_HOST,
            "akaa-baseurl-xxxxxxxxxxx-xxxxxxxxxxxxx.luna.akamaiapis.net",
        ),
    ]);
    let cache = Arc::new(CredentialCache::new(EnvCredentialProvider::new()));
    let signer = Signer::with_cache(ctx, cache.clone(), RequestSigner::new());

    let signatures = thread::scope(|s| {
        let handles = (0..8)
            .map(|_| {
                let signer = signer.clone();
                let data = &data;
                s.spawn(move || -> Result<String> {
                    let (mut parts, body) = post_request(data)?;
                    let headers = signer.sign(&mut parts, &body)?;
                    Ok(headers
                        .get(AUTHORIZATION)
                        .expect("authorization must be set")
                        .to_str()?
                        .to_string())
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread must not panic"))
            .collect::<Result<Vec<_>>>()
    })?;

    assert_eq!(signatures.len(), 8);
    assert!(signatures
        .iter()
        .all(|v| v.starts_with("EG1-HMAC-SHA256 client_token=akab-client-token-xxx")));
    assert!(!cache.is_expired());
    Ok(())
}
