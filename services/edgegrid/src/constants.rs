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

//! Names and defaults used by the EdgeGrid providers and signer.

// Env values used by the providers.
pub const AKAMAI_CLIENT_SECRET: &str = "AKAMAI_CLIENT_SECRET";
pub const AKAMAI_CLIENT_TOKEN: &str = "AKAMAI_CLIENT_TOKEN";
pub const AKAMAI_ACCESS_TOKEN: &str = "AKAMAI_ACCESS_TOKEN";
pub const AKAMAI_HOST: &str = "AKAMAI_HOST";
pub const AKAMAI_ENVRC_FILE: &str = "AKAMAI_ENVRC_FILE";
pub const AKAMAI_PROFILE: &str = "AKAMAI_PROFILE";

// Shared credentials file.
pub const DEFAULT_EDGERC_PATH: &str = "~/.edgerc";
pub const DEFAULT_PROFILE: &str = "default";
pub const EDGERC_CLIENT_SECRET: &str = "client_secret";
pub const EDGERC_CLIENT_TOKEN: &str = "client_token";
pub const EDGERC_ACCESS_TOKEN: &str = "access_token";
pub const EDGERC_HOST: &str = "host";

// Provider names attached to loaded credentials.
pub const STATIC_PROVIDER_NAME: &str = "StaticProvider";
pub const ENV_PROVIDER_NAME: &str = "EnvProvider";
pub const SHARED_CREDENTIALS_PROVIDER_NAME: &str = "SharedCredentialsProvider";

// Signing.
pub const EDGEGRID_ALGORITHM: &str = "EG1-HMAC-SHA256";
/// Largest prefix of a POST body that goes into the content hash.
pub const DEFAULT_MAX_BODY: usize = 131072;
