//! 메뉴 엔티티와 옵션 레지스트리.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use serde_json::Value;

use crate::domain::action::Action;
use crate::domain::error::MenuError;
use crate::domain::matcher::{self, CaseRule, Resolution};

pub const DEFAULT_EXIT_KEY: &str = "exit";

/// 옵션 식별자: 일반 라벨 또는 하위 메뉴 참조.
#[derive(Clone, Debug)]
pub enum OptionIdentity {
    Label(String),
    SubMenu(MenuRef),
}

impl OptionIdentity {
    /// 화면 표시/매칭에 쓰이는 텍스트. 하위 메뉴는 현재 label을 읽는다.
    pub fn text(&self) -> String {
        match self {
            OptionIdentity::Label(label) => label.clone(),
            OptionIdentity::SubMenu(menu) => menu.label(),
        }
    }
}

impl PartialEq for OptionIdentity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OptionIdentity::Label(a), OptionIdentity::Label(b)) => a == b,
            (OptionIdentity::SubMenu(a), OptionIdentity::SubMenu(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<&str> for OptionIdentity {
    fn from(label: &str) -> Self {
        OptionIdentity::Label(label.to_string())
    }
}

impl From<&MenuRef> for OptionIdentity {
    fn from(menu: &MenuRef) -> Self {
        OptionIdentity::SubMenu(menu.clone())
    }
}

/// 레지스트리 한 항목. 키는 삽입 후 바뀌지 않고 액션만 교체될 수 있다.
#[derive(Clone, Debug)]
pub struct RegistryEntry {
    pub identity: OptionIdentity,
    pub action: Option<Action>,
}

/// 렌더링 장식/문구. 정합성과 무관하며 언제든 바꿀 수 있다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStyle {
    /// 제목 앞에 3회 반복되는 문자열
    pub title_decorator: String,
    pub submenu_icon: String,
    pub action_icon: String,
    pub submenu_separator: String,
    pub action_separator: String,
    /// 입력 프롬프트
    pub input_message: String,
    pub invalid_option_message: String,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            title_decorator: "-".to_string(),
            submenu_icon: "+".to_string(),
            action_icon: "-".to_string(),
            submenu_separator: "|".to_string(),
            action_separator: "|".to_string(),
            input_message: "Please type an option and press enter: ".to_string(),
            invalid_option_message: "Invalid option, please try again :(".to_string(),
        }
    }
}

/// 텍스트 메뉴. 항상 [`MenuRef`]로 감싸져 여러 부모 메뉴에서 공유된다.
pub struct Menu {
    entries: RefCell<Vec<RegistryEntry>>,
    label: RefCell<String>,
    title: RefCell<String>,
    exit_key: String,
    forwarded_args: Vec<Value>,
    case_rule: CaseRule,
    clear_screen: bool,
    style: RefCell<MenuStyle>,
}

/// 공유 메뉴 핸들. 동일성 비교는 포인터 기준이다.
#[derive(Clone)]
pub struct MenuRef(Rc<Menu>);

impl MenuRef {
    pub fn ptr_eq(&self, other: &MenuRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for MenuRef {
    type Target = Menu;

    fn deref(&self) -> &Menu {
        &self.0
    }
}

impl fmt::Debug for MenuRef {
    // 순환 참조가 있을 수 있으므로 label만 출력한다.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MenuRef").field(&*self.label.borrow()).finish()
    }
}

impl Menu {
    pub fn builder(label: impl Into<String>) -> MenuBuilder {
        MenuBuilder::new(label)
    }

    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    /// label을 바꾼다. 부모 메뉴의 매칭 결과도 즉시 바뀐다.
    pub fn set_label(&self, label: impl Into<String>) -> Result<(), MenuError> {
        let label = label.into();
        validate_label(&label)?;
        *self.label.borrow_mut() = label;
        Ok(())
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        *self.title.borrow_mut() = title.into();
    }

    pub fn exit_key(&self) -> &str {
        &self.exit_key
    }

    pub fn forwarded_args(&self) -> &[Value] {
        &self.forwarded_args
    }

    pub fn case_rule(&self) -> CaseRule {
        self.case_rule
    }

    pub fn clears_screen(&self) -> bool {
        self.clear_screen
    }

    pub fn style(&self) -> Ref<'_, MenuStyle> {
        self.style.borrow()
    }

    pub fn update_style(&self, update: impl FnOnce(&mut MenuStyle)) {
        update(&mut *self.style.borrow_mut());
    }

    /// 등록된 옵션 수.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// 레지스트리 스냅샷(삽입 순서).
    pub fn entries(&self) -> Vec<RegistryEntry> {
        self.entries.borrow().clone()
    }

    /// 옵션의 액션을 조회한다. 등록되지 않은 키면 `None`.
    pub fn action_for(&self, identity: &OptionIdentity) -> Option<Option<Action>> {
        self.entries
            .borrow()
            .iter()
            .find(|entry| entry.identity == *identity)
            .map(|entry| entry.action.clone())
    }

    pub fn insert_option(
        &self,
        label: impl Into<String>,
        action: impl Into<Option<Action>>,
    ) -> Result<(), MenuError> {
        let label = label.into();
        validate_option_label(&label)?;
        upsert_entry(
            &mut self.entries.borrow_mut(),
            OptionIdentity::Label(label),
            action.into(),
        );
        Ok(())
    }

    /// 하위 메뉴를 추가한다. 자기 자신은 등록할 수 없다.
    ///
    /// 조상 메뉴를 하위 메뉴로 등록하면 `Rc` 순환이 생겨 해제되지 않는다.
    /// 이런 순환 트리의 실행 깊이는 `max_depth`로만 제한된다.
    pub fn insert_submenu(
        &self,
        menu: &MenuRef,
        action: impl Into<Option<Action>>,
    ) -> Result<(), MenuError> {
        if std::ptr::eq::<Menu>(&**menu, self) {
            return Err(MenuError::configuration(
                "options",
                format!("menu '{}' cannot contain itself", self.label()),
            ));
        }
        upsert_entry(
            &mut self.entries.borrow_mut(),
            OptionIdentity::SubMenu(menu.clone()),
            action.into(),
        );
        Ok(())
    }

    /// 이미 등록된 키의 액션만 교체한다.
    pub fn set_action(
        &self,
        identity: &OptionIdentity,
        action: impl Into<Option<Action>>,
    ) -> Result<(), MenuError> {
        let mut entries = self.entries.borrow_mut();
        let Some(entry) = entries.iter_mut().find(|e| e.identity == *identity) else {
            return Err(MenuError::configuration(
                "options",
                format!("'{}' is not registered", identity.text()),
            ));
        };
        entry.action = action.into();
        Ok(())
    }

    /// 사용자 입력을 등록된 옵션 식별자로 해석한다.
    pub fn resolve(&self, input: &str) -> Resolution {
        let entries = self.entries.borrow();
        matcher::resolve(&entries, input, self.case_rule, &self.exit_key)
    }
}

/// [`Menu`] 생성기. `build()`에서 설정을 한 번에 검증한다.
#[derive(Debug)]
pub struct MenuBuilder {
    label: String,
    title: String,
    clear_screen: bool,
    exit_key: String,
    forwarded_args: Vec<Value>,
    case_sensitive: bool,
    entries: Vec<RegistryEntry>,
    style: MenuStyle,
}

impl MenuBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            title: String::new(),
            clear_screen: false,
            exit_key: DEFAULT_EXIT_KEY.to_string(),
            forwarded_args: Vec::new(),
            case_sensitive: false,
            entries: Vec::new(),
            style: MenuStyle::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    pub fn exit_key(mut self, exit_key: impl Into<String>) -> Self {
        self.exit_key = exit_key.into();
        self
    }

    pub fn forwarded_args(mut self, args: impl IntoIterator<Item = Value>) -> Self {
        self.forwarded_args = args.into_iter().collect();
        self
    }

    pub fn case_sensitive(mut self, enabled: bool) -> Self {
        self.case_sensitive = enabled;
        self
    }

    pub fn style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    /// 일반 라벨 옵션. 같은 라벨이 이미 있으면 위치는 유지하고 액션만 바꾼다.
    pub fn option(mut self, label: impl Into<String>, action: impl Into<Option<Action>>) -> Self {
        upsert_entry(
            &mut self.entries,
            OptionIdentity::Label(label.into()),
            action.into(),
        );
        self
    }

    /// 하위 메뉴 옵션. 액션이 없으면 선택 시 하위 메뉴를 끝까지 실행한다.
    pub fn submenu(mut self, menu: &MenuRef, action: impl Into<Option<Action>>) -> Self {
        upsert_entry(
            &mut self.entries,
            OptionIdentity::SubMenu(menu.clone()),
            action.into(),
        );
        self
    }

    pub fn build(self) -> Result<MenuRef, MenuError> {
        validate_label(&self.label)?;

        if self.exit_key.is_empty() {
            return Err(MenuError::configuration("exitKey", "must not be empty"));
        }
        if has_line_break(&self.exit_key) {
            return Err(MenuError::configuration(
                "exitKey",
                "must be a single line of text",
            ));
        }

        for entry in &self.entries {
            if let OptionIdentity::Label(label) = &entry.identity {
                validate_option_label(label)?;
            }
        }

        Ok(MenuRef(Rc::new(Menu {
            entries: RefCell::new(self.entries),
            label: RefCell::new(self.label),
            title: RefCell::new(self.title),
            exit_key: self.exit_key,
            forwarded_args: self.forwarded_args,
            case_rule: CaseRule::from_case_sensitive(self.case_sensitive),
            clear_screen: self.clear_screen,
            style: RefCell::new(self.style),
        })))
    }
}

fn upsert_entry(entries: &mut Vec<RegistryEntry>, identity: OptionIdentity, action: Option<Action>) {
    if let Some(entry) = entries.iter_mut().find(|e| e.identity == identity) {
        entry.action = action;
    } else {
        entries.push(RegistryEntry { identity, action });
    }
}

fn validate_label(label: &str) -> Result<(), MenuError> {
    if label.trim().is_empty() {
        return Err(MenuError::configuration("label", "must not be empty"));
    }
    if has_line_break(label) {
        return Err(MenuError::configuration(
            "label",
            "must be a single line of text",
        ));
    }
    Ok(())
}

// 한 줄 입력으로는 개행이 포함된 라벨을 선택할 수 없다.
fn validate_option_label(label: &str) -> Result<(), MenuError> {
    if has_line_break(label) {
        return Err(MenuError::configuration(
            "options",
            format!("option {label:?} must be a single line of text"),
        ));
    }
    Ok(())
}

fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn noop() -> Action {
        Action::plain(|| Ok(()))
    }

    #[test]
    fn builder_applies_defaults() {
        let menu = Menu::builder("main").build().unwrap();

        assert_eq!(menu.label(), "main");
        assert_eq!(menu.title(), "");
        assert_eq!(menu.exit_key(), "exit");
        assert!(menu.forwarded_args().is_empty());
        assert_eq!(menu.case_rule(), CaseRule::Insensitive);
        assert!(!menu.clears_screen());
        assert!(menu.is_empty());
    }

    #[test]
    fn build_rejects_blank_label() {
        let err = Menu::builder("  ").build().unwrap_err();
        assert!(matches!(err, MenuError::Configuration { ref parameter, .. } if parameter == "label"));
    }

    #[test]
    fn build_rejects_multiline_values() {
        let err = Menu::builder("main").exit_key("ex\nit").build().unwrap_err();
        assert!(matches!(err, MenuError::Configuration { ref parameter, .. } if parameter == "exitKey"));

        let err = Menu::builder("main")
            .option("a\nb", noop())
            .build()
            .unwrap_err();
        assert!(matches!(err, MenuError::Configuration { ref parameter, .. } if parameter == "options"));
    }

    #[test]
    fn build_rejects_empty_exit_key() {
        let err = Menu::builder("main").exit_key("").build().unwrap_err();
        assert!(matches!(err, MenuError::Configuration { ref parameter, .. } if parameter == "exitKey"));
    }

    #[test]
    fn empty_title_is_allowed() {
        let menu = Menu::builder("main").title("").build().unwrap();
        assert_eq!(menu.title(), "");
    }

    #[test]
    fn duplicate_option_keeps_position_and_replaces_action() {
        let sub = Menu::builder("sub").build().unwrap();
        let menu = Menu::builder("main")
            .option("foo", None)
            .submenu(&sub, None)
            .option("bar", noop())
            .option("foo", noop())
            .submenu(&sub, Action::menu(|_| Ok(())))
            .build()
            .unwrap();

        let entries = menu.entries();
        let texts: Vec<String> = entries.iter().map(|e| e.identity.text()).collect();
        assert_eq!(texts, ["foo", "sub", "bar"]);
        assert!(entries[0].action.is_some());
        assert_eq!(entries[1].action.as_ref().map(Action::arity), Some(1));
    }

    #[test]
    fn set_action_reassigns_existing_key_only() {
        let menu = Menu::builder("main").option("foo", None).build().unwrap();

        menu.set_action(&"foo".into(), noop()).unwrap();
        assert!(matches!(menu.action_for(&"foo".into()), Some(Some(_))));

        let err = menu.set_action(&"missing".into(), noop()).unwrap_err();
        assert!(matches!(err, MenuError::Configuration { .. }));
        assert_eq!(menu.len(), 1);
    }

    #[test]
    fn submenu_identity_compares_by_reference() {
        let a = Menu::builder("same").build().unwrap();
        let b = Menu::builder("same").build().unwrap();

        assert_eq!(OptionIdentity::from(&a), OptionIdentity::from(&a.clone()));
        assert_ne!(OptionIdentity::from(&a), OptionIdentity::from(&b));
    }

    #[test]
    fn set_label_validates_and_updates() {
        let menu = Menu::builder("old").build().unwrap();
        assert!(menu.set_label("").is_err());
        menu.set_label("new").unwrap();
        assert_eq!(menu.label(), "new");
    }

    #[test]
    fn runtime_insertions_append_in_order() {
        let sub = Menu::builder("sub").build().unwrap();
        let menu = Menu::builder("main")
            .forwarded_args([json!(1)])
            .build()
            .unwrap();

        menu.insert_option("first", None).unwrap();
        menu.insert_submenu(&sub, None).unwrap();
        assert!(menu.insert_option("bad\r", None).is_err());

        let texts: Vec<String> = menu.entries().iter().map(|e| e.identity.text()).collect();
        assert_eq!(texts, ["first", "sub"]);
        assert_eq!(menu.forwarded_args(), &[json!(1)]);
    }

    #[test]
    fn menu_cannot_contain_itself() {
        let menu = Menu::builder("main").build().unwrap();

        let err = menu.insert_submenu(&menu, None).unwrap_err();
        assert!(matches!(err, MenuError::Configuration { ref parameter, .. } if parameter == "options"));
        assert!(menu.is_empty());
        assert_eq!(Rc::strong_count(&menu.0), 1);
    }

    #[test]
    fn style_can_be_updated_in_place() {
        let menu = Menu::builder("main").build().unwrap();
        menu.update_style(|s| s.submenu_icon = "*".to_string());
        assert_eq!(menu.style().submenu_icon, "*");
    }
}
