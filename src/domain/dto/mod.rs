//! # Data Transfer Objects
//!
//! - [`users`] - 사용자 검색 요청
//! - [`tokens`] - 토큰 엔드포인트 응답

pub mod users;
pub mod tokens;

pub use users::*;
