use serde::Deserialize;

/// OAuth2 토큰 엔드포인트 응답
///
/// client-credentials 그랜트 응답 중 요청 서명에 필요한 필드만 읽습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}
