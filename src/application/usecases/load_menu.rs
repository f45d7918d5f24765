//! 메뉴 문서에서 실행할 메뉴 트리를 만드는 유스케이스.

use std::rc::Rc;

use anyhow::{Context, Result};

use crate::application::ports::{MenuOutput, MenuRepository};
use crate::domain::menu::MenuRef;

pub struct LoadMenuUseCase<'a> {
    pub menu_repo: &'a dyn MenuRepository,
    pub output: Rc<dyn MenuOutput>,
}

impl<'a> LoadMenuUseCase<'a> {
    pub fn execute(&self) -> Result<MenuRef> {
        self.menu_repo
            .load_tree(self.output.clone())
            .context("failed to load menu tree")
    }
}
