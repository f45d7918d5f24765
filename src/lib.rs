//! menutree library root.
//! 라벨 옵션과 하위 메뉴를 조합하는 텍스트 메뉴를 Clean Architecture 계층으로 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use application::ports::{LineReader, MenuOutput, ScreenClearer};
pub use application::usecases::run_menu::RunMenuUseCase;
pub use application::usecases::step_menu::{StepMenuUseCase, StepOutcome};
pub use domain::action::Action;
pub use domain::error::{DispatchError, DispatchErrorKind, MenuError, ScreenUnavailable};
pub use domain::matcher::{CaseRule, Resolution};
pub use domain::menu::{Menu, MenuBuilder, MenuRef, MenuStyle, OptionIdentity, RegistryEntry};

use interface::cli::AppComposition;

/// 표준 입출력으로 메뉴를 종료 키가 입력될 때까지 실행한다.
pub fn run_menu(menu: &MenuRef) -> Result<(), MenuError> {
    let composition = AppComposition::default();
    composition.run_menu_usecase().execute(menu)
}

/// 표준 입출력으로 메뉴 한 단계를 처리한다.
pub fn step_menu(menu: &MenuRef) -> Result<StepOutcome, MenuError> {
    let composition = AppComposition::default();
    composition.step_menu_usecase().execute(menu)
}
