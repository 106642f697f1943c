//! User Entity Implementation
//!
//! ID 프로바이더가 반환한 사용자 레코드와, 커스텀 속성에서 파생되는 필드를 정의합니다.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::utils::string_utils::parse_bool_literal;

/// 내부 사용자 여부 속성 키
pub const IS_INTERNAL_ATTRIBUTE: &str = "is_internal";
/// 조직 관리자 여부 속성 키
pub const ORG_ADMIN_ATTRIBUTE: &str = "org_admin";
/// 사용자 유형 속성 키
pub const TYPE_ATTRIBUTE: &str = "type";

/// 사용자 엔티티
///
/// Keycloak `UserRepresentation`을 그대로 전달하면서 세 개의 파생 필드를 덧붙입니다.
/// 알려진 필드 외의 값은 `extra`에 보존되어 응답에 그대로 포함됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
    /// 다중 값 커스텀 속성
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, Vec<String>>>,

    /// `attributes["is_internal"][0]`에서 파생
    #[serde(default)]
    pub is_internal: bool,
    /// `attributes["org_admin"][0]`에서 파생
    #[serde(default)]
    pub org_admin: bool,
    /// `attributes["type"][0]`에서 파생
    #[serde(default, rename = "type")]
    pub type_: String,

    /// 그 외 프로바이더 필드 (그대로 전달)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// 커스텀 속성에서 파생 필드를 채웁니다.
    ///
    /// 각 키의 첫 번째 값만 사용하며, 불리언 파싱에 실패하면 해당 필드는 그대로 둡니다.
    /// 다른 필드와 속성은 변경하지 않습니다.
    pub fn with_custom_attributes(mut self) -> Self {
        if let Some(value) = self.first_attribute(IS_INTERNAL_ATTRIBUTE) {
            if let Some(flag) = parse_bool_literal(value) {
                self.is_internal = flag;
            }
        }

        if let Some(value) = self.first_attribute(ORG_ADMIN_ATTRIBUTE) {
            if let Some(flag) = parse_bool_literal(value) {
                self.org_admin = flag;
            }
        }

        if let Some(value) = self.first_attribute(TYPE_ATTRIBUTE) {
            self.type_ = value.to_string();
        }

        self
    }

    /// 속성의 첫 번째 값
    pub fn first_attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attributes| attributes.get(key))
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(attributes: Vec<(&str, Vec<&str>)>) -> User {
        let attributes = attributes
            .into_iter()
            .map(|(key, values)| {
                (key.to_string(), values.into_iter().map(str::to_string).collect())
            })
            .collect();

        User {
            id: Some("u-1".to_string()),
            attributes: Some(attributes),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_internal_true() {
        let user = user_with(vec![("is_internal", vec!["true"])]).with_custom_attributes();

        assert!(user.is_internal);
        assert!(!user.org_admin);
        assert_eq!(user.type_, "");
    }

    #[test]
    fn test_unparseable_bool_stays_false() {
        let user = user_with(vec![("is_internal", vec!["not-a-bool"]), ("org_admin", vec!["maybe"])])
            .with_custom_attributes();

        assert!(!user.is_internal);
        assert!(!user.org_admin);
    }

    #[test]
    fn test_missing_attributes_leave_defaults() {
        let user = User::default().with_custom_attributes();

        assert!(!user.is_internal);
        assert!(!user.org_admin);
        assert_eq!(user.type_, "");

        let user = user_with(vec![("is_internal", vec![]), ("type", vec![])]).with_custom_attributes();
        assert!(!user.is_internal);
        assert_eq!(user.type_, "");
    }

    #[test]
    fn test_only_first_value_is_used() {
        let user = user_with(vec![
            ("org_admin", vec!["1", "false"]),
            ("type", vec!["partner", "employee"]),
        ])
        .with_custom_attributes();

        assert!(user.org_admin);
        assert_eq!(user.type_, "partner");
    }

    #[test]
    fn test_enrichment_keeps_other_fields() {
        let original = user_with(vec![("type", vec!["employee"]), ("department", vec!["sales"])]);
        let enriched = original.clone().with_custom_attributes();

        assert_eq!(enriched.id, original.id);
        assert_eq!(enriched.attributes, original.attributes);
        assert_eq!(enriched.type_, "employee");
    }

    #[test]
    fn test_unknown_provider_fields_pass_through() {
        let json = r#"{
            "id": "9f1c",
            "username": "alice",
            "email": "alice@acme.io",
            "enabled": true,
            "totp": false,
            "access": {"manage": true},
            "attributes": {"type": ["employee"]}
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        let user = user.with_custom_attributes();
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["username"], "alice");
        assert_eq!(value["totp"], false);
        assert_eq!(value["access"]["manage"], true);
        assert_eq!(value["type"], "employee");
        assert_eq!(value["isInternal"], false);
        assert_eq!(value["attributes"]["type"][0], "employee");
    }
}
