//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리하는 모듈입니다.
//! 설정은 `main`에서 `PROFILE`에 따라 `.env.dev` / `.env.prod` / `.env` 파일로부터
//! 로드된 뒤 각 접근자를 통해 읽힙니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버 바인딩, 워커 수, CORS 설정
//! - [`keycloak_config`] - Keycloak 엔드포인트, 서비스 계정, strict 모드 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{KeycloakConfig, ServerConfig};
//!
//! let users_url = format!("{}{}", KeycloakConfig::backend_url()?, KeycloakConfig::users_path());
//! let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! ```

pub mod data_config;
pub mod keycloak_config;

pub use data_config::*;
pub use keycloak_config::*;
