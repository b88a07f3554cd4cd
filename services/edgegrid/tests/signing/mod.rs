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

use edgesign_core::Context;
use edgesign_edgegrid::{Credential, RequestSigner};
use serde::Deserialize;

mod golden;
mod signer;

#[derive(Debug, Deserialize)]
pub struct TestData {
    pub base_url: String,
    pub client_secret: String,
    pub client_token: String,
    pub access_token: String,
    pub timestamp: String,
    pub nonce: String,
    pub headers_to_sign: Vec<String>,
    pub tests: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub request: TestRequest,
    #[serde(default)]
    pub max_body: Option<usize>,
    #[serde(default)]
    pub headers_to_sign: Option<Vec<String>>,
    pub expected: String,
}

#[derive(Debug, Deserialize)]
pub struct TestRequest {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    #[serde(default)]
    pub data: String,
}

impl TestData {
    pub fn load() -> anyhow::Result<Self> {
        let content = include_str!("../testdata/testdata.json");
        Ok(serde_json::from_str(content)?)
    }

    pub fn credential(&self) -> Credential {
        let host = self.base_url.trim_start_matches("https://");
        Credential::new(
            &self.client_secret,
            &self.client_token,
            &self.access_token,
            host,
        )
    }

    /// A signer pinned to the fixture timestamp and nonce.
    pub fn signer(&self) -> RequestSigner {
        RequestSigner::new()
            .with_headers_to_sign(&self.headers_to_sign)
            .with_timestamp(&self.timestamp)
            .with_nonce(&self.nonce)
    }
}

impl TestRequest {
    pub fn build(&self, base_url: &str) -> anyhow::Result<(http::request::Parts, Vec<u8>)> {
        let mut builder = http::Request::builder()
            .method(self.method.as_str())
            .uri(format!("{base_url}{}", self.path));
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        Ok(builder.body(self.data.as_bytes().to_vec())?.into_parts())
    }
}

pub fn init_signing_test() -> anyhow::Result<(Context, TestData)> {
    let _ = env_logger::builder().is_test(true).try_init();
    Ok((Context::new(), TestData::load()?))
}
