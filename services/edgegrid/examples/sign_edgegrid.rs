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

use anyhow::Result;
use edgesign_core::{Context, OsEnv, Signer};
use edgesign_edgegrid::{CredentialError, RequestSigner, SharedCredentialsProvider};
use edgesign_file_read_std::StdFileRead;
use http::header::AUTHORIZATION;

fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new().with_file_read(StdFileRead).with_env(OsEnv);

    // Reads ~/.edgerc, or whatever AKAMAI_ENVRC_FILE and AKAMAI_PROFILE point at.
    let signer = Signer::new(
        ctx,
        SharedCredentialsProvider::new(),
        RequestSigner::new().with_headers_to_sign(["X-Request-Source"]),
    );

    let (mut parts, body) = http::Request::post(
        "https://akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx.luna.akamaiapis.net/papi/v1/search/find-by-value",
    )
    .header("x-request-source", "edgesign example")
    .header("content-type", "application/json")
    .body(br#"{"hostname": "www.example.com"}"#.to_vec())?
    .into_parts();

    match signer.sign(&mut parts, &body) {
        Ok(headers) => {
            println!("Request signed successfully!");
            println!("Authorization: {:?}", headers.get(AUTHORIZATION));
        }
        Err(err) if err.is_config_error() => match err.downcast_ref::<CredentialError>() {
            Some(CredentialError::SharedCredentialsFileNotFound { path }) => {
                eprintln!("No credentials file at {path}, create one or set AKAMAI_ENVRC_FILE");
            }
            _ => eprintln!("Credentials are not usable: {err}"),
        },
        Err(err) => eprintln!("Failed to sign request: {err}"),
    }

    Ok(())
}
