//! JSON 메뉴 문서 스키마와 필드 타입 검증.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_path_to_error::Segment;

use crate::domain::error::MenuError;
use crate::domain::menu::DEFAULT_EXIT_KEY;

/// 단일 메뉴 문서(`menus` 없이 메뉴 하나만 정의)일 때 쓰는 메뉴 id.
pub const SINGLE_MENU_ID: &str = "root";

/// 메뉴 트리 문서. `menus`는 문서에 적힌 순서를 유지한다.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuDocument {
    pub root: String,
    pub menus: Vec<(String, MenuDefinition)>,
}

impl MenuDocument {
    pub fn menu(&self, id: &str) -> Option<&MenuDefinition> {
        self.menus
            .iter()
            .find(|(menu_id, _)| menu_id == id)
            .map(|(_, def)| def)
    }
}

/// `{"root": ..., "menus": {...}}` 형태의 파일 표현.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MenuTreeFile {
    #[serde(default)]
    root: Option<String>,
    #[serde(deserialize_with = "ordered_entries")]
    menus: Vec<(String, MenuDefinition)>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct MenuDefinition {
    pub label: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "clearScr")]
    pub clear_screen: bool,
    #[serde(default = "default_exit_key")]
    pub exit_key: String,
    #[serde(default, rename = "menuFuncArgs")]
    pub forwarded_args: Vec<Value>,
    #[serde(default, rename = "caseSensible")]
    pub case_sensitive: bool,
    #[serde(deserialize_with = "option_entries")]
    pub options: Vec<OptionDefinition>,
}

fn default_exit_key() -> String {
    DEFAULT_EXIT_KEY.to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionDefinition {
    /// JSON 키. 일반 옵션은 라벨, 하위 메뉴 옵션은 슬롯 이름일 뿐이다.
    pub key: String,
    pub kind: OptionKind,
}

/// 옵션 값: `null`, 액션 객체, 또는 `{"submenu": id, "action": ...}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionKind {
    Submenu(SubmenuEntry),
    Plain(Option<ActionSpec>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmenuEntry {
    /// 참조할 메뉴 id
    #[serde(rename = "submenu")]
    pub menu: String,
    #[serde(default)]
    pub action: Option<ActionSpec>,
}

/// 설정 파일에서 선언할 수 있는 기본 제공 액션.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionSpec {
    /// 문구 출력. 하위 메뉴 액션에서는 `{label}`, `{args}`가 치환된다.
    Say(String),
    /// 외부 프로그램 실행. 하위 메뉴 액션은 전달 인자를 뒤에 붙인다.
    Command(Vec<String>),
}

/// JSON 객체를 키 순서 그대로 `(키, 값)` 목록으로 읽는다.
fn ordered_entries<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct EntriesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, T>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

fn option_entries<'de, D>(deserializer: D) -> Result<Vec<OptionDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(ordered_entries::<D, OptionKind>(deserializer)?
        .into_iter()
        .map(|(key, kind)| OptionDefinition { key, kind })
        .collect())
}

/// 문서 전체를 검증한다. `menus`가 없으면 최상위 객체를 단일 메뉴로 본다.
pub fn parse_document(value: &Value) -> Result<MenuDocument, MenuError> {
    let document = if value.get("menus").is_some() {
        let file: MenuTreeFile = serde_path_to_error::deserialize(value)
            .map_err(|err| configuration_error(&err, true))?;
        tree_document(file)?
    } else {
        let def: MenuDefinition = serde_path_to_error::deserialize(value)
            .map_err(|err| configuration_error(&err, false))?;
        MenuDocument {
            root: SINGLE_MENU_ID.to_string(),
            menus: vec![(SINGLE_MENU_ID.to_string(), def)],
        }
    };

    for (id, def) in &document.menus {
        check_commands(id, def)?;
    }
    Ok(document)
}

fn tree_document(file: MenuTreeFile) -> Result<MenuDocument, MenuError> {
    let root = match file.root {
        Some(root) => root,
        None => match file.menus.first() {
            Some((id, _)) => id.clone(),
            None => {
                return Err(MenuError::configuration(
                    "menus",
                    "must define at least one menu",
                ));
            }
        },
    };

    if !file.menus.iter().any(|(id, _)| *id == root) {
        return Err(MenuError::configuration(
            "root",
            format!("unknown menu '{root}'"),
        ));
    }

    Ok(MenuDocument {
        root,
        menus: file.menus,
    })
}

fn check_commands(menu_id: &str, def: &MenuDefinition) -> Result<(), MenuError> {
    for option in &def.options {
        let action = match &option.kind {
            OptionKind::Plain(action) => action,
            OptionKind::Submenu(entry) => &entry.action,
        };
        if let Some(ActionSpec::Command(argv)) = action
            && argv.first().is_none_or(|program| program.trim().is_empty())
        {
            return Err(MenuError::configuration(
                "options",
                format!("command for option '{}' in menu '{menu_id}' is empty", option.key),
            ));
        }
    }
    Ok(())
}

/// serde 오류를 잘못된 필드 이름이 담긴 설정 오류로 바꾼다.
/// 트리 문서는 `menus.<id>.<field>` 경로에서 메뉴 필드 이름을 꺼낸다.
fn configuration_error(
    err: &serde_path_to_error::Error<serde_json::Error>,
    tree: bool,
) -> MenuError {
    let keys: Vec<&str> = err
        .path()
        .iter()
        .filter_map(|segment| match segment {
            Segment::Map { key } => Some(key.as_str()),
            _ => None,
        })
        .collect();

    let (scope, field) = match (tree, keys.as_slice()) {
        (true, ["menus", id, field, ..]) => (format!("menus.{id}"), Some(*field)),
        (true, ["menus", id]) => (format!("menus.{id}"), None),
        (_, [field, ..]) => ("document".to_string(), Some(*field)),
        (_, []) => ("document".to_string(), None),
    };

    let reason = err.inner().to_string();
    let parameter = field
        .or_else(|| field_named_in(&reason))
        .map(str::to_string)
        .unwrap_or_else(|| scope.clone());

    MenuError::configuration(parameter, format!("{reason} (in {scope})"))
}

/// `missing field `x`` / `unknown field `x`` 메시지에서 필드 이름을 꺼낸다.
fn field_named_in(message: &str) -> Option<&str> {
    ["missing field `", "unknown field `"]
        .iter()
        .find_map(|prefix| message.strip_prefix(prefix)?.split('`').next())
}
