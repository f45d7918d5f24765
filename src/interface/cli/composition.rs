//! 애플리케이션 조립(composition root) 모듈.

use std::rc::Rc;

use crate::application::ports::ScreenClearer;
use crate::application::usecases::init_menu::InitMenuUseCase;
use crate::application::usecases::inspect_menu::InspectMenuUseCase;
use crate::application::usecases::load_menu::LoadMenuUseCase;
use crate::application::usecases::run_menu::RunMenuUseCase;
use crate::application::usecases::step_menu::StepMenuUseCase;
use crate::infrastructure::adapters::{
    ConsoleOutput, JsonMenuRepository, NoopScreen, StdinLineReader, TerminalScreen,
};
use crate::interface::cli::command::RunSettings;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    menu_repo: JsonMenuRepository,
    reader: StdinLineReader,
    screen: Box<dyn ScreenClearer>,
    output: Rc<ConsoleOutput>,
    max_depth: Option<usize>,
}

impl Default for AppComposition {
    /// 라이브러리 직접 호출용: 중첩 제한 없음, 화면 지우기 허용.
    fn default() -> Self {
        Self::new(RunSettings {
            config: None,
            max_depth: None,
            clear_screen: true,
        })
    }
}

impl AppComposition {
    pub fn new(settings: RunSettings) -> Self {
        let screen: Box<dyn ScreenClearer> = if settings.clear_screen {
            Box::new(TerminalScreen)
        } else {
            Box::new(NoopScreen)
        };

        Self {
            menu_repo: JsonMenuRepository {
                explicit_path: settings.config,
            },
            reader: StdinLineReader,
            screen,
            output: Rc::new(ConsoleOutput),
            max_depth: settings.max_depth,
        }
    }

    /// 메뉴 한 단계 처리 유스케이스를 생성한다.
    pub fn step_menu_usecase(&self) -> StepMenuUseCase<'_> {
        StepMenuUseCase {
            reader: &self.reader,
            screen: self.screen.as_ref(),
            output: self.output.as_ref(),
            max_depth: self.max_depth,
        }
    }

    /// 종료 키까지 반복 실행 유스케이스를 생성한다.
    pub fn run_menu_usecase(&self) -> RunMenuUseCase<'_> {
        RunMenuUseCase {
            step: self.step_menu_usecase(),
        }
    }

    /// 메뉴 문서 로딩 유스케이스를 생성한다.
    pub fn load_menu_usecase(&self) -> LoadMenuUseCase<'_> {
        LoadMenuUseCase {
            menu_repo: &self.menu_repo,
            output: self.output.clone(),
        }
    }

    /// 메뉴 문서 점검 유스케이스를 생성한다.
    pub fn inspect_menu_usecase(&self) -> InspectMenuUseCase<'_> {
        InspectMenuUseCase {
            menu_repo: &self.menu_repo,
            output: self.output.clone(),
        }
    }

    /// 템플릿 생성 유스케이스를 생성한다.
    pub fn init_menu_usecase(&self) -> InitMenuUseCase<'_> {
        InitMenuUseCase {
            menu_repo: &self.menu_repo,
        }
    }
}
