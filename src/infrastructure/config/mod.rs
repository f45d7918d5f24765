//! JSON 메뉴 문서 로딩/검증/조립 모듈.
//! 탐색 경로에서 문서를 찾아 필드 타입을 검증하고, 메뉴 트리로 조립한다.

mod assemble;
mod document;
mod inspection;
mod loader;

use std::path::Path;
use std::rc::Rc;

use anyhow::Result;

pub use assemble::assemble_menu;
pub use document::{
    ActionSpec, MenuDefinition, MenuDocument, OptionDefinition, OptionKind, SINGLE_MENU_ID,
    SubmenuEntry, parse_document,
};
pub use inspection::{MenuInspection, MenuSummary, OptionSummary};
pub use loader::{
    CONFIG_ENV, LoadedDocument, config_paths, load_document, read_document, template,
    write_template,
};

use crate::application::ports::MenuOutput;
use crate::domain::menu::MenuRef;

/// 문서를 찾아 메뉴 트리까지 조립한다.
pub fn load_menu_tree(explicit: Option<&Path>, output: Rc<dyn MenuOutput>) -> Result<MenuRef> {
    let loaded = load_document(explicit)?;
    Ok(assemble_menu(&loaded.document, output)?)
}

/// 진단 정보를 사람이 읽기 쉬운 JSON으로 반환한다. 조립 가능 여부도 함께 검증한다.
pub fn inspect_pretty_json(explicit: Option<&Path>, output: Rc<dyn MenuOutput>) -> Result<String> {
    let loaded = load_document(explicit)?;
    assemble_menu(&loaded.document, output)?;
    Ok(serde_json::to_string_pretty(&MenuInspection::from_loaded(&loaded))?)
}
