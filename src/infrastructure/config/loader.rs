//! 메뉴 문서 탐색/로딩/템플릿 생성.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};

use super::document::{MenuDocument, parse_document};

/// 메뉴 문서 경로를 지정하는 환경변수.
pub const CONFIG_ENV: &str = "MENUTREE_CONFIG";

#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: MenuDocument,
    pub searched_paths: Vec<PathBuf>,
    /// 실제로 읽은 파일. 기본 템플릿을 쓴 경우 `None`.
    pub loaded_path: Option<PathBuf>,
}

/// 탐색 경로 중 처음 존재하는 문서를 읽는다. 없으면 기본 템플릿을 쓴다.
/// 명시 경로(`--config`)가 주어졌는데 없으면 오류다.
pub fn load_document(explicit: Option<&Path>) -> Result<LoadedDocument> {
    if let Some(path) = explicit
        && !path.exists()
    {
        bail!("menu config not found at {}", path.display());
    }

    let searched_paths = config_paths(explicit);

    for path in &searched_paths {
        if !path.exists() {
            continue;
        }
        let document = read_document(path)?;
        return Ok(LoadedDocument {
            document,
            searched_paths: searched_paths.clone(),
            loaded_path: Some(path.clone()),
        });
    }

    let document = parse_document(&template()).context("built-in menu template is invalid")?;
    Ok(LoadedDocument {
        document,
        searched_paths,
        loaded_path: None,
    })
}

/// 명시 경로 + 환경변수 + 프로젝트 + 사용자 설정 순(높은 우선순위부터)으로 경로를 구성한다.
pub fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
    }

    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        paths.push(PathBuf::from(path));
    }

    paths.push(PathBuf::from(".menutree/menu.json"));

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("menutree").join("menu.json"));
    }

    dedup_paths(paths)
}

pub fn read_document(path: &Path) -> Result<MenuDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read menu config at {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
    let document = parse_document(&value)
        .with_context(|| format!("invalid menu config in {}", path.display()))?;
    Ok(document)
}

/// 기본 템플릿을 파일로 쓴다. 이미 있으면 덮어쓰지 않는다.
pub fn write_template(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("refusing to overwrite existing file {}", path.display());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let rendered = serde_json::to_string_pretty(&template())?;
    fs::write(path, format!("{rendered}\n"))
        .with_context(|| format!("failed to create menu template at {}", path.display()))
}

/// 최초 실행용 데모 메뉴 문서.
pub fn template() -> Value {
    json!({
        "root": "main",
        "menus": {
            "main": {
                "label": "main",
                "title": "menutree demo",
                "options": {
                    "hello": { "say": "Hello from menutree!" },
                    "settings": { "submenu": "settings" },
                    "about": {
                        "submenu": "about",
                        "action": { "say": "{label}: a composable text menu" }
                    },
                    "exit": null
                }
            },
            "settings": {
                "label": "settings",
                "title": "Settings",
                "exitKey": "back",
                "menuFuncArgs": ["demo"],
                "options": {
                    "about": {
                        "submenu": "about",
                        "action": { "say": "{label} opened with {args}" }
                    },
                    "browse": { "submenu": "about" },
                    "back": null
                }
            },
            "about": {
                "label": "about",
                "title": "About",
                "options": {
                    "version": { "say": concat!("menutree ", env!("CARGO_PKG_VERSION")) },
                    "exit": null
                }
            }
        }
    })
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
