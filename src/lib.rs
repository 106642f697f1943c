//! 사용자 디렉터리 서비스
//!
//! 사용자 검색 조건을 외부 ID 프로바이더(Keycloak 호환) 관리 API 조회로 변환하고,
//! 하나 이상의 조회 결과를 모아 커스텀 속성을 정리한 뒤 반환하는 얇은 중개 서비스입니다.
//!
//! # Features
//!
//! - **검색 모드**: 전체, 조직, 이메일, 사용자명, 사용자 ID 조회
//! - **속성 정리**: `is_internal`, `org_admin`, `type` 커스텀 속성을 필드로 파생
//! - **서비스 계정 인증**: client-credentials 토큰을 모든 조회 요청에 첨부
//! - **HTTP API**: `POST /api/v1/users/search`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검색 모드 결정, 결과 병합
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  ID 프로바이더   │ ← Keycloak 관리 API
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_directory_service::domain::dto::users::request::FindUsersCriteria;
//! use user_directory_service::services::auth::ServiceAccountTokenProvider;
//! use user_directory_service::services::users::{FinderSettings, UserFinderService};
//!
//! let provider = Arc::new(ServiceAccountTokenProvider::from_env()?);
//! let finder = UserFinderService::new(provider, FinderSettings::from_env()?);
//!
//! let criteria = FindUsersCriteria { emails: vec!["alice@acme.io".into()], ..Default::default() };
//! let users = finder.find_users(&criteria).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
