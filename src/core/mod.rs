//! # Core Framework Module
//!
//! 서비스 전반에서 공유하는 핵심 구성 요소를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 서비스 컨테이너
//! - **ServiceLocator**: 타입 기반 싱글톤 인스턴스 보관소
//! - **명시적 등록**: `main`에서 완성된 인스턴스를 `set`으로 등록
//! - **Thread-safe**: `RwLock` 기반 동시 조회
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **AppResult**: `Result<T, AppError>` 별칭

pub mod errors;
pub mod registry;

pub use errors::{AppError, AppResult};
pub use registry::ServiceLocator;
