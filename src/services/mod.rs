//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 사용자 검색과 외부 호출 인증을 담당합니다.
//!
//! # Features
//!
//! - 검색 조건별 조회 모드 결정 및 다중 조회 결과 병합
//! - 커스텀 속성 파생 필드 정리
//! - 서비스 계정 토큰 기반 인증 요청 생성
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{auth::ServiceAccountTokenProvider, users::{FinderSettings, UserFinderService}};
//!
//! let provider = Arc::new(ServiceAccountTokenProvider::from_env()?);
//! let finder = UserFinderService::new(provider, FinderSettings::from_env()?);
//! ```

pub mod users;
pub mod auth;
