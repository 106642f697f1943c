//! # 문자열 유틸리티
//!
//! 검색 조건 정리와 속성 값 파싱에 쓰이는 문자열 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  org-1  ".to_string())), Some("org-1".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("alice@example.com"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 불리언 리터럴 파싱
///
/// `1 t T TRUE true True`는 `true`, `0 f F FALSE false False`는 `false`로 해석합니다.
/// 그 외의 값은 `None`입니다. 앞뒤 공백은 허용하지 않습니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::parse_bool_literal;
///
/// assert_eq!(parse_bool_literal("True"), Some(true));
/// assert_eq!(parse_bool_literal("0"), Some(false));
/// assert_eq!(parse_bool_literal("yes"), None);
/// ```
pub fn parse_bool_literal(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 None으로 변환하고,
/// 유효한 문자열은 앞뒤 공백을 제거한 후 Some으로 반환합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Criteria {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     org_id: Option<String>,
/// }
///
/// // JSON: {"org_id": "  acme  "} → Some("acme")
/// // JSON: {"org_id": ""} → None
/// // JSON: {"org_id": null} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// `null`을 빈 목록으로 취급하는 문자열 목록 deserializer
pub fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
