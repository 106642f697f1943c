//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었으며, 비즈니스 로직은 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (내부 서비스, 관리 도구)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검색 모드 결정, 결과 병합             ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   AuthenticatedClientProvider - 토큰 첨부          ← Outbound Auth
//! └─────────────────────┬───────────────────────┘
//!                       │ GET /admin/realms/{realm}/users
//!                       ▼
//!               ID 프로바이더 (Keycloak)
//! ```
//!
//! ## 서비스 조회
//!
//! 핸들러는 `main`에서 등록된 서비스를 [`ServiceLocator`](crate::core::registry::ServiceLocator)로
//! 꺼내 사용합니다. 등록되지 않은 경우 500 응답을 반환합니다.
//!
//! ```rust,ignore
//! #[post("/search")]
//! pub async fn search_users(
//!     payload: web::Json<FindUsersCriteria>,
//! ) -> Result<HttpResponse, AppError> {
//!     let finder = ServiceLocator::try_get::<UserFinderService>()
//!         .ok_or_else(|| AppError::InternalError("...".to_string()))?;
//!     let users = finder.find_users(&payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(users))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 검색 엔드포인트
//!   - 사용자 검색 (`POST /api/v1/users/search`)

pub mod users;
