//! 메뉴 문서 진단(inspection) 뷰 모델.

use serde::Serialize;
use serde_json::Value;

use super::document::{ActionSpec, MenuDefinition, OptionKind, SubmenuEntry};
use super::loader::LoadedDocument;

#[derive(Debug, Clone, Serialize)]
pub struct MenuInspection {
    pub searched_paths: Vec<String>,
    /// 기본 템플릿을 사용한 경우 `None`
    pub loaded_path: Option<String>,
    pub root: String,
    pub menus: Vec<MenuSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuSummary {
    pub id: String,
    pub label: String,
    pub title: String,
    pub exit_key: String,
    pub case_sensitive: bool,
    pub clear_screen: bool,
    pub forwarded_args: Vec<Value>,
    pub options: Vec<OptionSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionSummary {
    pub key: String,
    /// `action` 또는 `submenu`
    pub kind: &'static str,
    pub submenu: Option<String>,
    pub action: Option<ActionSpec>,
}

impl MenuInspection {
    pub fn from_loaded(loaded: &LoadedDocument) -> Self {
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_path: loaded.loaded_path.as_ref().map(|p| p.display().to_string()),
            root: loaded.document.root.clone(),
            menus: loaded
                .document
                .menus
                .iter()
                .map(|(id, def)| summarize(id, def))
                .collect(),
        }
    }
}

fn summarize(id: &str, def: &MenuDefinition) -> MenuSummary {
    MenuSummary {
        id: id.to_string(),
        label: def.label.clone(),
        title: def.title.clone(),
        exit_key: def.exit_key.clone(),
        case_sensitive: def.case_sensitive,
        clear_screen: def.clear_screen,
        forwarded_args: def.forwarded_args.clone(),
        options: def
            .options
            .iter()
            .map(|option| match &option.kind {
                OptionKind::Plain(action) => OptionSummary {
                    key: option.key.clone(),
                    kind: "action",
                    submenu: None,
                    action: action.clone(),
                },
                OptionKind::Submenu(SubmenuEntry { menu, action }) => OptionSummary {
                    key: option.key.clone(),
                    kind: "submenu",
                    submenu: Some(menu.clone()),
                    action: action.clone(),
                },
            })
            .collect(),
    }
}
