//! # User Directory HTTP Handlers
//!
//! 사용자 검색 엔드포인트를 처리하는 핸들러입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users/search` | 조건에 맞는 사용자 목록 조회 | 200 OK |
//!
//! ## 오류 응답
//!
//! | 원인 | 상태 코드 |
//! |------|-----------|
//! | 잘못된 JSON 본문 | 400 Bad Request |
//! | 토큰 발급 실패, 프로바이더 연결/응답 오류 | 502 Bad Gateway |
//! | 서비스 미등록 | 500 Internal Server Error |

use actix_web::{web, HttpResponse, post};
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::users::request::FindUsersCriteria;
use crate::services::users::UserFinderService;

/// 사용자 검색 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/users/search`
///
/// # 요청 본문
///
/// 모든 필드는 선택입니다. 빈 본문 `{}`은 전체 사용자 조회입니다.
///
/// ```json
/// {
///   "orgId": "acme",
///   "emails": ["alice@acme.io", "bob@acme.io"],
///   "queryLimit": 10
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// [
///   {
///     "id": "9f1c...",
///     "username": "alice",
///     "email": "alice@acme.io",
///     "attributes": {"type": ["employee"], "is_internal": ["true"]},
///     "isInternal": true,
///     "orgAdmin": false,
///     "type": "employee"
///   }
/// ]
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users/search \
///   -H "Content-Type: application/json" \
///   -d '{"orgId":"acme","usernames":["alice"]}'
/// ```
#[post("/search")]
pub async fn search_users(
    payload: web::Json<FindUsersCriteria>,
) -> Result<HttpResponse, AppError> {
    let finder = ServiceLocator::try_get::<UserFinderService>()
        .ok_or_else(|| AppError::InternalError("UserFinderService가 등록되지 않았습니다".to_string()))?;

    let users = finder.find_users(&payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(users))
}
