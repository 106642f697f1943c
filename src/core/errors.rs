//! # Application Error Handling System
//!
//! 사용자 디렉터리 서비스의 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 그대로 HTTP 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! 외부 ID 프로바이더(Keycloak) 호출 과정에서 발생하는 에러는
//! 발생 지점에서 한 번만 로깅되고, 감싸거나 재분류하지 않고 호출자에게 전달됩니다.
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 검색 조건 본문 |
//! | `AuthProvisioningError` | 502 Bad Gateway | 토큰 발급 실패 |
//! | `TransportError` | 502 Bad Gateway | 네트워크/DNS/TLS 오류 |
//! | `DecodeError` | 502 Bad Gateway | 응답 본문 읽기/JSON 파싱 실패 |
//! | `UpstreamStatusError` | 502 Bad Gateway | strict 모드에서 200 이외의 응답 |
//! | `InternalError` | 500 Internal Server Error | 설정 누락 등 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let response = request.send().await
//!     .map_err(|e| AppError::TransportError(format!("사용자 조회 요청 실패: {}", e)))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 검색 요청 처리 중 발생할 수 있는 모든 실패를 표현합니다.
/// 재시도나 부분 성공 개념은 없으며, 첫 번째 에러가 그대로 반환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증된 요청 생성 실패 (502 Bad Gateway)
    ///
    /// 토큰 엔드포인트 호출 실패, 토큰 응답 파싱 실패 등
    /// 인증 정보를 준비하지 못한 경우입니다.
    #[error("Auth provisioning error: {0}")]
    AuthProvisioningError(String),

    /// 요청 전송 실패 (502 Bad Gateway)
    #[error("Transport error: {0}")]
    TransportError(String),

    /// 응답 본문 읽기 또는 디코딩 실패 (502 Bad Gateway)
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// strict 모드에서 200이 아닌 업스트림 응답 (502 Bad Gateway)
    #[error("Upstream returned status {status} for {url}")]
    UpstreamStatusError { status: u16, url: String },

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthProvisioningError(_)
            | AppError::TransportError(_)
            | AppError::DecodeError(_)
            | AppError::UpstreamStatusError { .. } => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러는 `{"error": "..."}` 형식의 JSON으로 응답됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
