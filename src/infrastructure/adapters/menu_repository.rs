//! 메뉴 문서 저장소 포트 구현 어댑터.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Result;

use crate::application::ports::{MenuOutput, MenuRepository};
use crate::domain::menu::MenuRef;
use crate::infrastructure::config;

/// JSON 파일 기반 메뉴 저장소 어댑터.
#[derive(Debug, Default)]
pub struct JsonMenuRepository {
    /// `--config`로 지정된 경로. 탐색 경로보다 우선한다.
    pub explicit_path: Option<PathBuf>,
}

impl MenuRepository for JsonMenuRepository {
    fn load_tree(&self, output: Rc<dyn MenuOutput>) -> Result<MenuRef> {
        config::load_menu_tree(self.explicit_path.as_deref(), output)
    }

    fn inspect_pretty_json(&self, output: Rc<dyn MenuOutput>) -> Result<String> {
        config::inspect_pretty_json(self.explicit_path.as_deref(), output)
    }

    fn write_template(&self, path: &Path) -> Result<()> {
        config::write_template(path)
    }
}
