//! 메뉴 문서 탐색/검증 결과를 확인하는 유스케이스.

use std::rc::Rc;

use anyhow::Result;

use crate::application::ports::{MenuOutput, MenuRepository};

/// 현재 적용될 메뉴 문서를 사람이 읽기 쉬운 JSON으로 반환한다.
pub struct InspectMenuUseCase<'a> {
    pub menu_repo: &'a dyn MenuRepository,
    pub output: Rc<dyn MenuOutput>,
}

impl<'a> InspectMenuUseCase<'a> {
    /// 점검 결과 문자열을 생성한다. 트리 조립이 실패하면 오류를 반환한다.
    pub fn execute(&self) -> Result<String> {
        self.menu_repo.inspect_pretty_json(self.output.clone())
    }
}
