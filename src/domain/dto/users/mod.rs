//! 사용자 관련 DTO 모듈
//!
//! 검색 API로 들어오는 요청 구조체를 제공합니다.
//! 응답은 [`crate::domain::entities::users::User`] 목록을 그대로 직렬화합니다.

pub mod request;

pub use request::*;
