// This file is part of the terraform-provider-fortios project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Debug;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Certificate, Client, Method, Proxy, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::mapping::{convert, Payload};
use crate::version::FirmwareVersion;

use super::{ClientError, FortiClient, RequestOptions, WriteResponse};

const RETRY_DELAY: Duration = Duration::from_secs(1);
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Connection settings of a [`RestClient`]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RestConfig {
    /// Address of the unit, `host[:port]` or a full `https://` URL
    pub hostname: String,
    pub token: String,
    /// Skip the verification of the certificate of the unit
    pub insecure: bool,
    /// PEM file holding the certificates trusted for the unit
    pub cabundle: Option<String>,
    pub vdom: Option<String>,
    pub http_proxy: Option<String>,
}

impl Debug for RestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestConfig")
            .field("hostname", &self.hostname)
            .field("token", &"<redacted>")
            .field("insecure", &self.insecure)
            .field("cabundle", &self.cabundle)
            .field("vdom", &self.vdom)
            .field("http_proxy", &self.http_proxy)
            .finish()
    }
}

/// Client of the FortiOS REST API authenticated with an API token
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base: Url,
    token: String,
    vdom: Option<String>,
    firmware: Option<FirmwareVersion>,
}

impl Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base", &self.base.as_str())
            .field("vdom", &self.vdom)
            .field("firmware", &self.firmware)
            .finish_non_exhaustive()
    }
}

/// Envelope of every answer of the API
#[derive(Debug, Default, Deserialize)]
struct ApiResponse {
    http_status: Option<u16>,
    status: Option<String>,
    results: Option<Value>,
    mkey: Option<Value>,
    version: Option<String>,
    error: Option<i64>,
    cli_error: Option<String>,
}

impl RestClient {
    /// Build the client and discover the firmware version of the unit
    pub async fn connect(config: &RestConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(concat!(
                "terraform-provider-fortios/",
                env!("CARGO_PKG_VERSION")
            ))
            .danger_accept_invalid_certs(config.insecure);

        if let Some(path) = &config.cabundle {
            let pem = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read CA bundle `{}`", path))?;
            for certificate in Certificate::from_pem_bundle(&pem)
                .with_context(|| format!("Invalid CA bundle `{}`", path))?
            {
                builder = builder.add_root_certificate(certificate);
            }
        }
        if let Some(proxy) = &config.http_proxy {
            let proxy =
                Proxy::all(proxy).with_context(|| format!("Invalid HTTP proxy `{}`", proxy))?;
            builder = builder.proxy(proxy);
        }

        let base = if config.hostname.contains("://") {
            Url::parse(&config.hostname)
        } else {
            Url::parse(&format!("https://{}/", config.hostname))
        }
        .with_context(|| format!("Invalid FortiOS hostname `{}`", config.hostname))?;

        let mut client = Self {
            client: builder.build().context("Failed to create HTTP client")?,
            base,
            token: config.token.clone(),
            vdom: config.vdom.clone(),
            firmware: None,
        };
        client.firmware = client.discover_firmware().await;
        Ok(client)
    }

    async fn discover_firmware(&self) -> Option<FirmwareVersion> {
        let status = async {
            let url = self.url(&["api", "v2", "monitor", "system", "status"], None)?;
            let (status, body) = self.send(Method::GET, url, None, 0).await?;
            decode(status, &body)
        }
        .await;
        match status {
            Ok(ApiResponse {
                version: Some(version),
                ..
            }) => {
                let firmware = FirmwareVersion::parse(&version);
                debug!(%version, ?firmware, "FortiOS firmware version");
                firmware
            }
            Ok(_) => {
                warn!("FortiOS status does not report a firmware version");
                None
            }
            Err(err) => {
                warn!(error = %err, "Could not get the FortiOS firmware version");
                None
            }
        }
    }

    fn url(&self, segments: &[&str], vdom: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Request(format!("invalid base URL `{}`", self.base)))?
            .pop_if_empty()
            .extend(segments);
        if let Some(vdom) = vdom.or(self.vdom.as_deref()) {
            url.query_pairs_mut().append_pair("vdom", vdom);
        }
        Ok(url)
    }

    fn cmdb_url(
        &self,
        path: &str,
        mkey: Option<&str>,
        options: &RequestOptions,
    ) -> Result<Url, ClientError> {
        let mut segments = vec!["api", "v2", "cmdb"];
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
        segments.extend(mkey);
        self.url(&segments, options.vdom.as_deref())
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        payload: Option<&Payload>,
        retries: u32,
    ) -> Result<(StatusCode, String), ClientError> {
        let mut attempt = 0;
        loop {
            debug!("{} {}", method, url);
            let mut request = self
                .client
                .request(method.clone(), url.clone())
                .bearer_auth(&self.token);
            if let Some(payload) = payload {
                request = request.json(payload);
            }
            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await?;
                    return Ok((status, body));
                }
                Err(err) if attempt < retries && (err.is_connect() || err.is_timeout()) => {
                    attempt += 1;
                    warn!(error = %err, attempt, "FortiOS request failed, retrying");
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    async fn write(
        &self,
        method: Method,
        url: Url,
        payload: &Payload,
        options: &RequestOptions,
    ) -> Result<WriteResponse, ClientError> {
        let (status, body) = self.send(method, url, Some(payload), options.retries).await?;
        let response = decode(status, &body)?;
        Ok(WriteResponse {
            mkey: response.mkey.as_ref().and_then(convert::string),
        })
    }
}

/// Decode the envelope of an answer, turning API failures into errors
fn decode(status: StatusCode, body: &str) -> Result<ApiResponse, ClientError> {
    let response = if body.trim().is_empty() {
        Ok(ApiResponse::default())
    } else {
        serde_json::from_str::<ApiResponse>(body)
    };

    if !status.is_success() {
        let message = match &response {
            Ok(response) => error_message(response),
            Err(_) => None,
        }
        .unwrap_or_else(|| sanitize_for_log(body));
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let response = response?;
    if response.status.as_deref() == Some("error") {
        return Err(ClientError::Api {
            status: response.http_status.unwrap_or(status.as_u16()),
            message: error_message(&response).unwrap_or_else(|| "unknown error".to_owned()),
        });
    }
    Ok(response)
}

fn error_message(response: &ApiResponse) -> Option<String> {
    match (&response.cli_error, response.error) {
        (Some(cli_error), _) if !cli_error.trim().is_empty() => Some(cli_error.trim().to_owned()),
        (_, Some(code)) => Some(format!("error code {}", code)),
        _ => None,
    }
}

fn sanitize_for_log(body: &str) -> String {
    let body: String = body
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .collect();
    if body.len() > MAX_LOG_BODY_LENGTH {
        format!("{}... [truncated]", &body[..MAX_LOG_BODY_LENGTH])
    } else {
        body
    }
}

#[async_trait]
impl FortiClient for RestClient {
    fn firmware_version(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    async fn create(
        &self,
        path: &str,
        payload: &Payload,
        options: &RequestOptions,
    ) -> Result<WriteResponse, ClientError> {
        let url = self.cmdb_url(path, None, options)?;
        self.write(Method::POST, url, payload, options).await
    }

    async fn read(
        &self,
        path: &str,
        mkey: Option<&str>,
        options: &RequestOptions,
    ) -> Result<Option<Payload>, ClientError> {
        let url = self.cmdb_url(path, mkey, options)?;
        let (status, body) = self.send(Method::GET, url, None, options.retries).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = match decode(status, &body) {
            Ok(response) => response,
            Err(ClientError::Api { status: 404, .. }) => return Ok(None),
            Err(err) => return Err(err),
        };
        let object = match response.results {
            Some(Value::Array(results)) => results.into_iter().next(),
            results => results,
        };
        match object {
            Some(Value::Object(object)) => Ok(Some(object)),
            _ => Ok(None),
        }
    }

    async fn update(
        &self,
        path: &str,
        mkey: Option<&str>,
        payload: &Payload,
        options: &RequestOptions,
    ) -> Result<WriteResponse, ClientError> {
        let url = self.cmdb_url(path, mkey, options)?;
        self.write(Method::PUT, url, payload, options).await
    }

    async fn delete(
        &self,
        path: &str,
        mkey: &str,
        options: &RequestOptions,
    ) -> Result<(), ClientError> {
        let url = self.cmdb_url(path, Some(mkey), options)?;
        let (status, body) = self.send(Method::DELETE, url, None, options.retries).await?;
        match decode(status, &body) {
            Ok(_) | Err(ClientError::Api { status: 404, .. }) => Ok(()),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RestClient {
        RestClient {
            client: Client::new(),
            base: Url::parse("https://192.0.2.1/").expect("valid URL"),
            token: "token".to_owned(),
            vdom: Some("root".to_owned()),
            firmware: None,
        }
    }

    #[test]
    fn cmdb_urls() {
        let client = client();
        let url = client
            .cmdb_url("system/admin", Some("admin"), &RequestOptions::default())
            .expect("valid URL");
        assert_eq!(url.as_str(), "https://192.0.2.1/api/v2/cmdb/system/admin/admin?vdom=root");

        let options = RequestOptions {
            vdom: Some("vd1".to_owned()),
            retries: 1,
        };
        let url = client.cmdb_url("router/isis", None, &options).expect("valid URL");
        assert_eq!(url.as_str(), "https://192.0.2.1/api/v2/cmdb/router/isis?vdom=vd1");

        let url = client
            .cmdb_url("firewall/address", Some("net/24"), &options)
            .expect("valid URL");
        assert_eq!(
            url.as_str(),
            "https://192.0.2.1/api/v2/cmdb/firewall/address/net%2F24?vdom=vd1"
        );
    }

    #[test]
    fn decode_envelopes() {
        let response = decode(
            StatusCode::OK,
            r#"{"http_status": 200, "status": "success", "mkey": 7, "version": "v7.2.4"}"#,
        )
        .expect("success");
        assert_eq!(response.mkey.as_ref().and_then(convert::string).as_deref(), Some("7"));
        assert_eq!(response.version.as_deref(), Some("v7.2.4"));

        let err = decode(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"http_status": 500, "status": "error", "error": -5, "cli_error": "entry not found"}"#,
        )
        .expect_err("API error");
        assert!(matches!(err, ClientError::Api { status: 500, ref message } if message == "entry not found"));

        let err = decode(StatusCode::UNAUTHORIZED, "<html>Unauthorized</html>").expect_err("API error");
        assert!(matches!(err, ClientError::Api { status: 401, .. }));

        let err = decode(StatusCode::OK, r#"{"status": "error", "error": -3}"#).expect_err("API error");
        assert!(matches!(err, ClientError::Api { status: 200, ref message } if message == "error code -3"));

        assert!(decode(StatusCode::OK, "").is_ok());
    }

    #[test]
    fn config_debug_hides_token() {
        let config = RestConfig {
            hostname: "192.0.2.1".to_owned(),
            token: "secret-token".to_owned(),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("secret-token"));
    }
}
