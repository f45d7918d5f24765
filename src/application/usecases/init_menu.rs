//! 기본 메뉴 문서 템플릿을 생성하는 유스케이스.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::MenuRepository;

pub struct InitMenuUseCase<'a> {
    pub menu_repo: &'a dyn MenuRepository,
}

impl<'a> InitMenuUseCase<'a> {
    /// 템플릿을 쓰고 생성된 경로를 반환한다.
    pub fn execute(&self, path: &Path) -> Result<PathBuf> {
        self.menu_repo.write_template(path)?;
        Ok(path.to_path_buf())
    }
}
