//! 사용자 요청 DTO 모듈

pub mod find_users_request;

pub use find_users_request::FindUsersCriteria;
