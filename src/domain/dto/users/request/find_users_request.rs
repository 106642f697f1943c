//! 사용자 검색 조건 DTO
//!
//! HTTP 요청 본문이나 다른 서비스 코드에서 전달되는 사용자 검색 조건입니다.
//! 모든 필드는 선택이며, 비어 있는 필드는 검색 모드 결정에서 "없음"으로 취급됩니다.

use serde::{Deserialize, Serialize};
use crate::utils::string_utils::{deserialize_optional_string, deserialize_string_list};

/// 사용자 검색 조건
///
/// ```json
/// {
///   "orgId": "acme",
///   "emails": ["alice@acme.io", "", "bob@acme.io"],
///   "queryLimit": 10
/// }
/// ```
///
/// - 목록의 빈 문자열/공백 항목은 조회 시 건너뜁니다.
/// - `queryLimit`이 없거나 0 이하이면 결과 개수를 제한하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindUsersCriteria {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub org_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub emails: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub usernames: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub user_ids: Vec<String>,
    #[serde(default)]
    pub query_limit: Option<i64>,
}

impl FindUsersCriteria {
    /// 비어 있지 않은 조직 ID
    pub fn org_id(&self) -> Option<&str> {
        self.org_id
            .as_deref()
            .map(str::trim)
            .filter(|org_id| !org_id.is_empty())
    }

    /// 양수인 결과 제한 값
    pub fn effective_limit(&self) -> Option<usize> {
        self.query_limit
            .filter(|limit| *limit > 0)
            .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_body() {
        let json = r#"{
            "orgId": " acme ",
            "emails": ["a@acme.io", ""],
            "usernames": null,
            "userIds": ["id-1"],
            "queryLimit": 5
        }"#;

        let criteria: FindUsersCriteria = serde_json::from_str(json).unwrap();

        assert_eq!(criteria.org_id(), Some("acme"));
        assert_eq!(criteria.emails, vec!["a@acme.io".to_string(), "".to_string()]);
        assert!(criteria.usernames.is_empty());
        assert_eq!(criteria.user_ids, vec!["id-1".to_string()]);
        assert_eq!(criteria.effective_limit(), Some(5));
    }

    #[test]
    fn test_empty_body_is_unrestricted() {
        let criteria: FindUsersCriteria = serde_json::from_str("{}").unwrap();

        assert_eq!(criteria, FindUsersCriteria::default());
        assert_eq!(criteria.org_id(), None);
        assert_eq!(criteria.effective_limit(), None);
    }

    #[test]
    fn test_non_positive_limit_means_unlimited() {
        for limit in [0, -1, i64::MIN] {
            let criteria = FindUsersCriteria { query_limit: Some(limit), ..Default::default() };
            assert_eq!(criteria.effective_limit(), None);
        }
    }

    #[test]
    fn test_blank_org_id_set_in_code_is_ignored() {
        let criteria = FindUsersCriteria { org_id: Some("   ".to_string()), ..Default::default() };

        assert_eq!(criteria.org_id(), None);
    }
}
