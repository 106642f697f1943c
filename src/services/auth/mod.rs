//! 인증 협력자 모듈
//!
//! 외부 ID 프로바이더로 나가는 요청에 인증 정보를 붙이는 역할을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::{AuthenticatedClientProvider, ServiceAccountTokenProvider};
//!
//! let provider: Arc<dyn AuthenticatedClientProvider> = Arc::new(ServiceAccountTokenProvider::from_env()?);
//! let request = provider.authorized_request(reqwest::Method::GET, &url).await?;
//! let response = request.send().await?;
//! ```

pub mod client_provider;

pub use client_provider::*;
