//! 사용자 입력 → 옵션 식별자 해석 규칙.

use crate::domain::menu::{OptionIdentity, RegistryEntry};

/// 라벨 비교 시 대소문자 처리 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseRule {
    Sensitive,
    Insensitive,
}

impl CaseRule {
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            CaseRule::Sensitive
        } else {
            CaseRule::Insensitive
        }
    }

    /// 대소문자 무시 비교는 유니코드 전체 케이스 폴딩(`ß` → `ss`, `ς` → `σ`)을 따른다.
    pub fn matches(self, input: &str, candidate: &str) -> bool {
        match self {
            CaseRule::Sensitive => input == candidate,
            CaseRule::Insensitive => caseless::default_caseless_match_str(input, candidate),
        }
    }
}

/// 입력 해석 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// 레지스트리의 원본 키(또는 종료 키). 입력 문자열이 아니다.
    Matched(OptionIdentity),
    /// 일치하는 옵션이 없을 때의 원본 입력.
    Unmatched(String),
}

/// 삽입 순서대로 레지스트리를 훑어 처음 일치하는 키를 돌려준다.
///
/// 하위 메뉴 키는 그 메뉴의 현재 label과, 일반 키는 키 문자열과 비교한다.
/// 레지스트리에서 찾지 못하면 종료 키를 마지막 일반 라벨 후보로 취급한다.
/// 따라서 종료 키와 같은 텍스트의 레지스트리 항목이 있으면 그 항목이 먼저 선택된다.
pub fn resolve(
    entries: &[RegistryEntry],
    input: &str,
    rule: CaseRule,
    exit_key: &str,
) -> Resolution {
    for entry in entries {
        let matched = match &entry.identity {
            OptionIdentity::SubMenu(menu) => rule.matches(input, &menu.label()),
            OptionIdentity::Label(label) => rule.matches(input, label),
        };
        if matched {
            return Resolution::Matched(entry.identity.clone());
        }
    }

    if rule.matches(input, exit_key) {
        return Resolution::Matched(OptionIdentity::Label(exit_key.to_string()));
    }

    Resolution::Unmatched(input.to_string())
}

/// 해석된 식별자가 종료 키인지 판단한다. 일반 라벨만 종료 키가 될 수 있다.
pub fn is_exit(identity: &OptionIdentity, rule: CaseRule, exit_key: &str) -> bool {
    match identity {
        OptionIdentity::Label(label) => rule.matches(label, exit_key),
        OptionIdentity::SubMenu(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action::Action;
    use crate::domain::menu::{Menu, MenuRef};

    fn entry(identity: OptionIdentity) -> RegistryEntry {
        RegistryEntry {
            identity,
            action: Some(Action::plain(|| Ok(()))),
        }
    }

    fn label(text: &str) -> RegistryEntry {
        entry(OptionIdentity::Label(text.to_string()))
    }

    fn submenu(menu: &MenuRef) -> RegistryEntry {
        entry(OptionIdentity::SubMenu(menu.clone()))
    }

    #[test]
    fn insensitive_match_returns_registry_key() {
        let entries = [label("foo"), label("bar")];

        let resolved = resolve(&entries, "FOO", CaseRule::Insensitive, "exit");
        assert_eq!(resolved, Resolution::Matched("foo".into()));
        assert_eq!(
            resolve(&entries, "ABC", CaseRule::Insensitive, "exit"),
            resolve(&entries, "abc", CaseRule::Insensitive, "exit"),
        );
    }

    #[test]
    fn insensitive_match_uses_full_case_folding() {
        let entries = [label("straße"), label("σας")];

        assert_eq!(
            resolve(&entries, "STRASSE", CaseRule::Insensitive, "exit"),
            Resolution::Matched("straße".into())
        );
        assert_eq!(
            resolve(&entries, "ΣΑΣ", CaseRule::Insensitive, "exit"),
            Resolution::Matched("σας".into())
        );
        assert!(CaseRule::Insensitive.matches("σασ", "ΣΑΣ"));
        assert!(!CaseRule::Sensitive.matches("STRASSE", "straße"));
    }

    #[test]
    fn sensitive_match_requires_exact_text() {
        let entries = [label("foo")];

        assert_eq!(
            resolve(&entries, "FOO", CaseRule::Sensitive, "exit"),
            Resolution::Unmatched("FOO".to_string())
        );
        assert_eq!(
            resolve(&entries, "foo", CaseRule::Sensitive, "exit"),
            Resolution::Matched("foo".into())
        );
    }

    #[test]
    fn submenu_matches_on_its_label() {
        let sub = Menu::builder("Settings").build().unwrap();
        let entries = [label("foo"), submenu(&sub)];

        let resolved = resolve(&entries, "settings", CaseRule::Insensitive, "exit");
        assert_eq!(resolved, Resolution::Matched(OptionIdentity::SubMenu(sub.clone())));

        sub.set_label("prefs").unwrap();
        assert_eq!(
            resolve(&entries, "settings", CaseRule::Insensitive, "exit"),
            Resolution::Unmatched("settings".to_string())
        );
    }

    #[test]
    fn first_match_wins_under_case_folding() {
        let entries = [label("Foo"), label("foo")];

        assert_eq!(
            resolve(&entries, "foo", CaseRule::Insensitive, "exit"),
            Resolution::Matched("Foo".into())
        );
        assert_eq!(
            resolve(&entries, "foo", CaseRule::Sensitive, "exit"),
            Resolution::Matched("foo".into())
        );
    }

    #[test]
    fn exit_key_matches_without_registration() {
        let resolved = resolve(&[], "EXIT", CaseRule::Insensitive, "exit");
        assert_eq!(resolved, Resolution::Matched("exit".into()));

        assert_eq!(
            resolve(&[], "EXIT", CaseRule::Sensitive, "exit"),
            Resolution::Unmatched("EXIT".to_string())
        );
    }

    #[test]
    fn submenu_labelled_like_exit_key_shadows_it() {
        let sub = Menu::builder("exit").build().unwrap();
        let entries = [submenu(&sub)];

        let resolved = resolve(&entries, "exit", CaseRule::Insensitive, "exit");
        let Resolution::Matched(identity) = resolved else {
            panic!("expected a match");
        };
        assert!(!is_exit(&identity, CaseRule::Insensitive, "exit"));
    }

    #[test]
    fn registered_exit_label_precedes_later_submenu() {
        let sub = Menu::builder("exit").build().unwrap();
        let entries = [label("Exit"), submenu(&sub)];

        let Resolution::Matched(identity) = resolve(&entries, "exit", CaseRule::Insensitive, "exit")
        else {
            panic!("expected a match");
        };
        assert_eq!(identity, "Exit".into());
        assert!(is_exit(&identity, CaseRule::Insensitive, "exit"));
    }

    #[test]
    fn empty_registry_rejects_everything_but_exit() {
        assert_eq!(
            resolve(&[], "anything", CaseRule::Insensitive, "quit"),
            Resolution::Unmatched("anything".to_string())
        );
    }
}
