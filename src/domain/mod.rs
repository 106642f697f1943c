//! # Domain Layer
//!
//! 사용자 디렉터리 서비스의 도메인 타입을 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/         # ID 프로바이더 레코드
//! │   └── users/
//! │       └── user.rs   # User + 커스텀 속성 파생 필드
//! └── dto/              # 경계를 넘나드는 데이터
//!     ├── users/
//!     │   └── request/  # FindUsersCriteria
//!     └── tokens/       # 토큰 엔드포인트 응답
//! ```
//!
//! 엔티티는 한 번의 검색 호출 안에서 생성되고 소비됩니다.
//! 별도의 저장소나 생명주기는 없습니다.

pub mod entities;
pub mod dto;

pub use entities::users::User;
pub use dto::users::request::FindUsersCriteria;
