//! API 라우트 설정 모듈
//!
//! 사용자 검색 API와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `POST /api/v1/users/search` - 사용자 검색
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// 잘못된 JSON 본문은 `AppError::ValidationError`(400)로 응답합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users/search \
///   -H "Content-Type: application/json" \
///   -d '{"orgId":"acme","emails":["alice@acme.io"]}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::ValidationError(err.to_string()).into()
            }))
            .service(handlers::users::search_users)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 외부 ID 프로바이더의 상태는 확인하지 않습니다.
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_directory_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
