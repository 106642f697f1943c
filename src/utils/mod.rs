//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 정리, 불리언 리터럴 파싱, serde 헬퍼
//! - [`display_terminal`] - 시작 시 터미널 출력

pub mod string_utils;
pub mod display_terminal;
