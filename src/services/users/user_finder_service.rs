//! # 사용자 검색 서비스 구현
//!
//! 검색 조건을 ID 프로바이더 사용자 API 조회로 변환하고, 하나 이상의 응답을
//! 모아 커스텀 속성을 정리한 뒤 요청된 개수만큼 잘라서 반환합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! FindUsersCriteria
//!        │
//!        ▼
//! ┌─────────────────┐     ┌──────────────────────────────┐
//! │ SelectionMode   │────►│ URL 목록                      │
//! │ ::resolve       │     │ • all:   {users_url}          │
//! └─────────────────┘     │ • org:   ?q=org_id:<org>      │
//!                         │ • list:  ?<key>=<v>&q=...     │
//!                         └──────────────┬───────────────┘
//!                                        │ 순서대로, 하나씩
//!                                        ▼
//!                         ┌──────────────────────────────┐
//!                         │ execute_get_users            │
//!                         │ • 인증된 요청 생성            │
//!                         │ • 200만 디코딩                │
//!                         │ • User::with_custom_attributes│
//!                         └──────────────┬───────────────┘
//!                                        ▼
//!                              이어 붙이기 → limit_results
//! ```
//!
//! ## 오류 처리
//!
//! 첫 번째 실패(인증, 전송, 디코딩)에서 전체 호출이 중단되고 그때까지 모은 결과는 버립니다.
//! 오류는 발생한 지점에서 한 번만 로그로 남깁니다.
//! 200이 아닌 응답은 기본적으로 빈 결과로 취급하며, strict 모드에서는 오류입니다.

use std::collections::BTreeMap;
use std::sync::Arc;
use reqwest::{Method, StatusCode};
use crate::{
    config::KeycloakConfig,
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::request::FindUsersCriteria,
        entities::users::user::User,
    },
    services::auth::AuthenticatedClientProvider,
    utils::string_utils::is_valid_string,
};
use super::selection_mode::SelectionMode;

/// 조직 필터 쿼리 키
pub const ORG_QUERY_KEY: &str = "q";
pub const EMAIL_QUERY_KEY: &str = "email";
pub const USERNAME_QUERY_KEY: &str = "username";
pub const USER_ID_QUERY_KEY: &str = "id";

/// 사용자 검색 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderSettings {
    /// 사용자 목록 엔드포인트 (쿼리 없는 절대 URL)
    pub users_url: String,
    /// 200이 아닌 응답을 오류로 처리할지 여부
    pub strict_status: bool,
}

impl FinderSettings {
    pub fn new(users_url: impl Into<String>, strict_status: bool) -> Self {
        Self {
            users_url: users_url.into(),
            strict_status,
        }
    }

    /// `KEYCLOAK_BACKEND_URL` + `KEYCLOAK_USERS_PATH`, `KEYCLOAK_STRICT_STATUS`
    pub fn from_env() -> AppResult<Self> {
        let users_url = format!("{}{}", KeycloakConfig::backend_url()?, KeycloakConfig::users_path());

        Ok(Self::new(users_url, KeycloakConfig::strict_status()))
    }
}

/// 사용자 검색 서비스
///
/// 불변 설정과 인증 제공자만 보유하므로 여러 요청에서 동시에 공유해도 됩니다.
/// 한 번의 `find_users` 호출 안에서는 요청을 순차적으로 보냅니다.
pub struct UserFinderService {
    client_provider: Arc<dyn AuthenticatedClientProvider>,
    settings: FinderSettings,
}

impl UserFinderService {
    pub fn new(client_provider: Arc<dyn AuthenticatedClientProvider>, settings: FinderSettings) -> Self {
        Self {
            client_provider,
            settings,
        }
    }

    pub fn settings(&self) -> &FinderSettings {
        &self.settings
    }

    /// 검색 조건에 맞는 사용자 목록을 조회합니다.
    ///
    /// # Arguments
    ///
    /// * `criteria` - 조직 ID, 이메일/사용자명/ID 목록, 결과 제한
    ///
    /// # Returns
    ///
    /// 요청 순서대로 이어 붙인 사용자 목록. `query_limit`이 양수이면 앞에서부터 그 개수만큼만 남깁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthProvisioningError` - 인증된 요청을 만들 수 없음
    /// * `AppError::TransportError` - 요청 전송 실패
    /// * `AppError::DecodeError` - 응답 본문이 사용자 배열이 아님
    /// * `AppError::UpstreamStatusError` - strict 모드에서 200이 아닌 응답
    pub async fn find_users(&self, criteria: &FindUsersCriteria) -> AppResult<Vec<User>> {
        let mode = SelectionMode::resolve(criteria);
        log::debug!("사용자 검색 모드: {}", mode.name());

        let users = match mode {
            SelectionMode::AllUsers => self.find_all_users().await?,
            SelectionMode::OrgOnly { org_id } => self.find_users_by_org_id(org_id).await?,
            SelectionMode::Emails { emails, org_id } => {
                self.find_users_by_lookup(EMAIL_QUERY_KEY, emails, org_id).await?
            }
            SelectionMode::Usernames { usernames, org_id } => {
                self.find_users_by_lookup(USERNAME_QUERY_KEY, usernames, org_id).await?
            }
            SelectionMode::UserIds { user_ids, org_id } => {
                self.find_users_by_lookup(USER_ID_QUERY_KEY, user_ids, org_id).await?
            }
        };

        let users = limit_results(users, criteria.effective_limit());
        log::debug!("사용자 검색 완료: {}명", users.len());

        Ok(users)
    }

    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        self.execute_get_users(&self.settings.users_url).await
    }

    /// 조직 필터만 있는 조회. 콜론은 인코딩하지 않습니다.
    async fn find_users_by_org_id(&self, org_id: &str) -> AppResult<Vec<User>> {
        let url = format!(
            "{}?{}=org_id:{}",
            self.settings.users_url,
            ORG_QUERY_KEY,
            urlencoding::encode(org_id)
        );

        self.execute_get_users(&url).await
    }

    /// 목록의 값마다 한 번씩 조회해 결과를 입력 순서대로 이어 붙입니다.
    async fn find_users_by_lookup(
        &self,
        key: &str,
        values: &[String],
        org_id: Option<&str>,
    ) -> AppResult<Vec<User>> {
        let filters = base_filters(org_id);
        let mut users = Vec::new();

        for value in values.iter().filter(|value| is_valid_string(value)) {
            let url = build_request_url(&self.settings.users_url, &filters, key, value);
            users.extend(self.execute_get_users(&url).await?);
        }

        Ok(users)
    }

    /// 단일 GET 요청을 실행하고 응답을 사용자 목록으로 변환합니다.
    async fn execute_get_users(&self, url: &str) -> AppResult<Vec<User>> {
        log::info!("사용자 조회 요청: {}", url);

        let request = self
            .client_provider
            .authorized_request(Method::GET, url)
            .await
            .map_err(logged)?;

        let response = request
            .send()
            .await
            .map_err(|e| logged(AppError::TransportError(format!("{} 요청 실패: {}", url, e))))?;

        let status = response.status();
        if status != StatusCode::OK {
            if self.settings.strict_status {
                return Err(logged(AppError::UpstreamStatusError {
                    status: status.as_u16(),
                    url: url.to_string(),
                }));
            }

            log::warn!("사용자 조회 응답 상태 {}, 빈 결과로 처리: {}", status, url);
            return Ok(Vec::new());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| logged(AppError::DecodeError(format!("{} 응답 본문 읽기 실패: {}", url, e))))?;

        let users: Vec<User> = serde_json::from_slice(&body)
            .map_err(|e| logged(AppError::DecodeError(format!("{} 응답 파싱 실패: {}", url, e))))?;

        Ok(users.into_iter().map(User::with_custom_attributes).collect())
    }
}

fn logged(error: AppError) -> AppError {
    log::error!("사용자 조회 실패: {}", error);
    error
}

/// 목록 조회에 공통으로 붙는 필터
pub fn base_filters(org_id: Option<&str>) -> BTreeMap<String, String> {
    let mut filters = BTreeMap::new();

    if let Some(org_id) = org_id {
        filters.insert(ORG_QUERY_KEY.to_string(), format!("org_id:{}", org_id));
    }

    filters
}

/// 공통 필터에 `key=value`를 더한 요청 URL을 만듭니다.
///
/// 공통 필터는 변경하지 않습니다. 키는 정렬되고 값은 퍼센트 인코딩됩니다.
///
/// ```rust,ignore
/// let filters = base_filters(Some("acme"));
/// let url = build_request_url("http://idp/users", &filters, "email", "a@acme.io");
/// assert_eq!(url, "http://idp/users?email=a%40acme.io&q=org_id%3Aacme");
/// ```
pub fn build_request_url(
    base_url: &str,
    base_filters: &BTreeMap<String, String>,
    key: &str,
    value: &str,
) -> String {
    let mut filters = base_filters.clone();
    filters.insert(key.to_string(), value.to_string());

    let query = filters
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base_url, query)
}

/// 양수 제한이 있으면 앞에서부터 그 개수만 남깁니다.
pub fn limit_results(mut users: Vec<User>, limit: Option<usize>) -> Vec<User> {
    if let Some(limit) = limit {
        users.truncate(limit);
    }
    users
}
