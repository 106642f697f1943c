//! # Keycloak Configuration Module
//!
//! 외부 ID 프로바이더(Keycloak 호환) 연동 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수
//! export KEYCLOAK_BACKEND_URL="http://localhost:8081"
//! export KEYCLOAK_CLIENT_ID="user-directory"
//! export KEYCLOAK_CLIENT_SECRET="change-me"
//!
//! # 선택
//! export KEYCLOAK_USERS_PATH="/admin/realms/master/users"
//! export KEYCLOAK_TOKEN_PATH="/realms/master/protocol/openid-connect/token"
//! export KEYCLOAK_STRICT_STATUS="false"
//! ```

use std::env;
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::{is_valid_string, parse_bool_literal};

/// Keycloak 연동 설정 접근자
pub struct KeycloakConfig;

impl KeycloakConfig {
    /// Keycloak 서버의 기본 URL (`KEYCLOAK_BACKEND_URL`, 필수)
    ///
    /// 끝의 `/`는 제거되어 경로와 바로 이어 붙일 수 있습니다.
    pub fn backend_url() -> AppResult<String> {
        required("KEYCLOAK_BACKEND_URL").map(|url| url.trim_end_matches('/').to_string())
    }

    /// 사용자 목록 엔드포인트 경로
    ///
    /// # 기본값
    ///
    /// `/admin/realms/master/users`
    pub fn users_path() -> String {
        env::var("KEYCLOAK_USERS_PATH")
            .unwrap_or_else(|_| "/admin/realms/master/users".to_string())
    }

    /// 토큰 발급 엔드포인트 경로
    ///
    /// # 기본값
    ///
    /// `/realms/master/protocol/openid-connect/token`
    pub fn token_path() -> String {
        env::var("KEYCLOAK_TOKEN_PATH")
            .unwrap_or_else(|_| "/realms/master/protocol/openid-connect/token".to_string())
    }

    /// 서비스 계정 Client ID (`KEYCLOAK_CLIENT_ID`, 필수)
    pub fn client_id() -> AppResult<String> {
        required("KEYCLOAK_CLIENT_ID")
    }

    /// 서비스 계정 Client Secret (`KEYCLOAK_CLIENT_SECRET`, 필수)
    ///
    /// 로그에 출력하지 마세요.
    pub fn client_secret() -> AppResult<String> {
        required("KEYCLOAK_CLIENT_SECRET")
    }

    /// 200이 아닌 응답을 에러로 처리할지 여부 (`KEYCLOAK_STRICT_STATUS`)
    ///
    /// 기본값 `false`에서는 200이 아닌 응답이 빈 결과로 취급됩니다.
    /// 해석할 수 없는 값도 `false`로 처리됩니다.
    pub fn strict_status() -> bool {
        env::var("KEYCLOAK_STRICT_STATUS")
            .ok()
            .and_then(|value| parse_bool_literal(value.trim()))
            .unwrap_or(false)
    }
}

fn required(name: &str) -> AppResult<String> {
    match env::var(name) {
        Ok(value) if is_valid_string(&value) => Ok(value),
        _ => Err(AppError::InternalError(format!("{} must be set", name))),
    }
}
