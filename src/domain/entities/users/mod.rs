//! Users Entity Module
//!
//! Keycloak 사용자 레코드와 커스텀 속성 후처리를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let users: Vec<User> = serde_json::from_slice(&body)?;
//! let users: Vec<User> = users.into_iter().map(User::with_custom_attributes).collect();
//! ```

pub mod user;

pub use user::User;
