//! # 인증된 HTTP 요청 제공자
//!
//! ID 프로바이더 관리 API를 호출하려면 모든 요청에 Bearer 토큰이 필요합니다.
//! 사용자 검색 서비스는 토큰의 발급과 수명을 알지 못하며,
//! [`AuthenticatedClientProvider`]에게 "이 메서드와 URL로 보낼 준비된 요청"을 받아서 전송만 합니다.
//!
//! ## 서비스 계정 플로우 (client credentials)
//!
//! ```text
//! ┌──────────────────────┐                          ┌─────────────────┐
//! │ UserFinderService    │                          │    Keycloak     │
//! └──────────┬───────────┘                          └────────┬────────┘
//!            │ authorized_request(GET, url)                  │
//!            ├──────────────► ServiceAccountTokenProvider     │
//!            │                        │ POST token_url        │
//!            │                        │ grant_type=client_credentials
//!            │                        ├──────────────────────►│
//!            │                        │◄──────────────────────┤ access_token
//!            │◄───────────────────────┤ RequestBuilder + Bearer
//!            │ send()                                         │
//!            ├───────────────────────────────────────────────►│
//! ```
//!
//! 토큰은 캐시하지 않습니다. 요청마다 새 토큰을 발급받습니다.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use crate::config::KeycloakConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::tokens::TokenResponse;

/// 인증 정보가 첨부된 요청을 만들어 주는 협력자
///
/// 반환된 `RequestBuilder`는 자신을 만든 `reqwest::Client`를 함께 들고 있으므로
/// 호출자는 `send()`만 호출하면 됩니다.
#[async_trait]
pub trait AuthenticatedClientProvider: Send + Sync {
    /// 주어진 메서드와 URL로 전송 준비가 끝난 요청을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthProvisioningError` - 토큰을 준비하지 못한 경우
    async fn authorized_request(&self, method: Method, url: &str) -> AppResult<RequestBuilder>;
}

/// Keycloak 서비스 계정 토큰 제공자
///
/// OAuth 2.0 client-credentials 그랜트로 액세스 토큰을 발급받아
/// 요청에 `Authorization: Bearer ...` 헤더를 붙입니다.
pub struct ServiceAccountTokenProvider {
    http_client: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl ServiceAccountTokenProvider {
    pub fn new(
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// 환경 변수에서 토큰 엔드포인트와 서비스 계정 정보를 읽어 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `KEYCLOAK_BACKEND_URL`, `KEYCLOAK_CLIENT_ID`,
    ///   `KEYCLOAK_CLIENT_SECRET` 중 하나라도 없는 경우
    pub fn from_env() -> AppResult<Self> {
        let token_url = format!("{}{}", KeycloakConfig::backend_url()?, KeycloakConfig::token_path());

        Ok(Self::new(
            token_url,
            KeycloakConfig::client_id()?,
            KeycloakConfig::client_secret()?,
        ))
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// client-credentials 그랜트로 액세스 토큰을 발급받습니다.
    ///
    /// # 요청 형식
    ///
    /// ```text
    /// POST {token_url}
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// grant_type=client_credentials&client_id=...&client_secret=...
    /// ```
    async fn fetch_access_token(&self) -> AppResult<String> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::AuthProvisioningError(format!("토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::AuthProvisioningError(format!(
                "토큰 발급 실패 ({}): {}", status, error_text
            )));
        }

        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| AppError::AuthProvisioningError(format!("토큰 응답 파싱 실패: {}", e)))?;

        Ok(token.access_token)
    }
}

#[async_trait]
impl AuthenticatedClientProvider for ServiceAccountTokenProvider {
    async fn authorized_request(&self, method: Method, url: &str) -> AppResult<RequestBuilder> {
        let access_token = self.fetch_access_token().await?;

        Ok(self.http_client.request(method, url).bearer_auth(access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use reqwest::Method;
    use serde_json::json;

    fn provider_for(server: &MockServer) -> ServiceAccountTokenProvider {
        ServiceAccountTokenProvider::new(server.url("/token"), "user-directory", "s3cret")
    }

    #[tokio::test]
    async fn test_request_carries_bearer_token() {
        let server = MockServer::start();
        let token_mock = server.mock(|when, then| {
            when.method(POST).path("/token");
            then.status(200).json_body(json!({
                "access_token": "svc-token",
                "expires_in": 300,
                "token_type": "Bearer"
            }));
        });
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/realms/master/users")
                .header("authorization", "Bearer svc-token");
            then.status(200).json_body(json!([]));
        });

        let provider = provider_for(&server);
        let request = provider
            .authorized_request(Method::GET, &server.url("/admin/realms/master/users"))
            .await
            .unwrap();
        let response = request.send().await.unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        token_mock.assert_calls(1);
        api_mock.assert_calls(1);
    }

    #[tokio::test]
    async fn test_token_endpoint_rejection_is_provisioning_error() {
        let server = MockServer::start();
        let token_mock = server.mock(|when, then| {
            when.method(POST).path("/token");
            then.status(401).body(r#"{"error":"unauthorized_client"}"#);
        });

        let provider = provider_for(&server);
        let result = provider.authorized_request(Method::GET, &server.url("/users")).await;

        match result {
            Err(AppError::AuthProvisioningError(msg)) => assert!(msg.contains("unauthorized_client")),
            Err(other) => panic!("Expected AuthProvisioningError, got {:?}", other),
            Ok(_) => panic!("Expected AuthProvisioningError, got a request"),
        }
        token_mock.assert_calls(1);
    }

    #[tokio::test]
    async fn test_malformed_token_response_is_provisioning_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/token");
            then.status(200).json_body(json!({"token_type": "Bearer"}));
        });

        let provider = provider_for(&server);
        let result = provider.authorized_request(Method::GET, &server.url("/users")).await;

        assert!(matches!(result, Err(AppError::AuthProvisioningError(_))));
    }
}
