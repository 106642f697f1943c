//! 검색 조건에서 조회 모드를 결정합니다.

use crate::domain::dto::users::request::FindUsersCriteria;

/// 사용자 조회 모드
///
/// 검색 조건 하나는 정확히 하나의 모드로 결정되며, 우선순위는 다음과 같습니다.
///
/// | 순위 | 모드         | 조건                                   | 요청 수          |
/// |------|--------------|----------------------------------------|------------------|
/// | 1    | `AllUsers`   | 조직 ID와 모든 목록이 비어 있음        | 1 (쿼리 없음)    |
/// | 2    | `OrgOnly`    | 조직 ID만 있음                         | 1 (`q=org_id:`)  |
/// | 3    | `Emails`     | 이메일 목록이 있음                     | 이메일당 1       |
/// | 4    | `Usernames`  | 이메일 없음, 사용자명 목록이 있음      | 사용자명당 1     |
/// | 5    | `UserIds`    | 이메일/사용자명 없음, ID 목록이 있음   | ID당 1           |
///
/// 목록 모드에서는 조직 ID가 있을 때 모든 요청에 같은 조직 필터가 붙습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode<'a> {
    AllUsers,
    OrgOnly {
        org_id: &'a str,
    },
    Emails {
        emails: &'a [String],
        org_id: Option<&'a str>,
    },
    Usernames {
        usernames: &'a [String],
        org_id: Option<&'a str>,
    },
    UserIds {
        user_ids: &'a [String],
        org_id: Option<&'a str>,
    },
}

impl<'a> SelectionMode<'a> {
    /// 검색 조건에서 모드를 한 번 결정합니다.
    ///
    /// 목록은 원소가 하나라도 있으면 "있음"으로 봅니다.
    /// 원소가 모두 공백이면 해당 모드가 선택되지만 요청은 발생하지 않습니다.
    pub fn resolve(criteria: &'a FindUsersCriteria) -> Self {
        let org_id = criteria.org_id();

        if !criteria.emails.is_empty() {
            return SelectionMode::Emails { emails: &criteria.emails, org_id };
        }

        if !criteria.usernames.is_empty() {
            return SelectionMode::Usernames { usernames: &criteria.usernames, org_id };
        }

        if !criteria.user_ids.is_empty() {
            return SelectionMode::UserIds { user_ids: &criteria.user_ids, org_id };
        }

        match org_id {
            Some(org_id) => SelectionMode::OrgOnly { org_id },
            None => SelectionMode::AllUsers,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SelectionMode::AllUsers => "all",
            SelectionMode::OrgOnly { .. } => "org",
            SelectionMode::Emails { .. } => "emails",
            SelectionMode::Usernames { .. } => "usernames",
            SelectionMode::UserIds { .. } => "user_ids",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_criteria_selects_all_users() {
        let criteria = FindUsersCriteria::default();

        assert_eq!(SelectionMode::resolve(&criteria), SelectionMode::AllUsers);
    }

    #[test]
    fn test_blank_org_id_selects_all_users() {
        let criteria = FindUsersCriteria { org_id: Some("  ".to_string()), ..Default::default() };

        assert_eq!(SelectionMode::resolve(&criteria), SelectionMode::AllUsers);
    }

    #[test]
    fn test_org_only() {
        let criteria = FindUsersCriteria { org_id: Some("acme".to_string()), ..Default::default() };

        assert_eq!(SelectionMode::resolve(&criteria), SelectionMode::OrgOnly { org_id: "acme" });
    }

    #[test]
    fn test_emails_win_over_other_lists() {
        let criteria = FindUsersCriteria {
            org_id: Some("acme".to_string()),
            emails: strings(&["a@acme.io"]),
            usernames: strings(&["alice"]),
            user_ids: strings(&["id-1"]),
            ..Default::default()
        };

        let mode = SelectionMode::resolve(&criteria);

        assert_eq!(mode, SelectionMode::Emails { emails: &criteria.emails, org_id: Some("acme") });
        assert_eq!(mode.name(), "emails");
    }

    #[test]
    fn test_usernames_win_over_user_ids() {
        let criteria = FindUsersCriteria {
            usernames: strings(&["alice"]),
            user_ids: strings(&["id-1"]),
            ..Default::default()
        };

        assert_eq!(
            SelectionMode::resolve(&criteria),
            SelectionMode::Usernames { usernames: &criteria.usernames, org_id: None }
        );
    }

    #[test]
    fn test_user_ids_last() {
        let criteria = FindUsersCriteria { user_ids: strings(&["id-1"]), ..Default::default() };

        assert_eq!(SelectionMode::resolve(&criteria).name(), "user_ids");
    }

    #[test]
    fn test_all_blank_list_still_selects_list_mode() {
        let criteria = FindUsersCriteria {
            org_id: Some("acme".to_string()),
            emails: strings(&["", " "]),
            ..Default::default()
        };

        assert_eq!(SelectionMode::resolve(&criteria).name(), "emails");
    }
}
