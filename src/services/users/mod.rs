//! 사용자 검색 서비스 모듈
//!
//! 검색 조건을 ID 프로바이더 조회로 변환하고 결과를 모아 반환합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserFinderService;
//! use crate::domain::dto::users::request::FindUsersCriteria;
//!
//! let criteria = FindUsersCriteria { org_id: Some("acme".into()), ..Default::default() };
//! let users = finder.find_users(&criteria).await?;
//! ```

pub mod selection_mode;
pub mod user_finder_service;

pub use selection_mode::SelectionMode;
pub use user_finder_service::*;
