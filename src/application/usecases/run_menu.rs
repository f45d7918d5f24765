//! 종료 키가 입력될 때까지 메뉴를 반복 실행하는 유스케이스.

use crate::application::usecases::step_menu::StepMenuUseCase;
use crate::domain::error::MenuError;
use crate::domain::menu::MenuRef;

/// 메뉴 트리의 최상위 진입점. 액션 없는 하위 메뉴도 이 루프로 실행된다.
#[derive(Clone, Copy)]
pub struct RunMenuUseCase<'a> {
    pub step: StepMenuUseCase<'a>,
}

impl<'a> RunMenuUseCase<'a> {
    pub fn execute(&self, menu: &MenuRef) -> Result<(), MenuError> {
        self.run_at(menu, 0)
    }

    pub(crate) fn run_at(&self, menu: &MenuRef, depth: usize) -> Result<(), MenuError> {
        while self.step.step_at(menu, depth)?.should_continue() {}
        Ok(())
    }
}
