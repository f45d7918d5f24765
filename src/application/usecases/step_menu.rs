//! 메뉴 한 단계(렌더링 → 입력 → 해석 → 실행) 유스케이스.

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::application::ports::{LineReader, MenuOutput, ScreenClearer};
use crate::application::usecases::run_menu::RunMenuUseCase;
use crate::domain::action::Action;
use crate::domain::error::{DispatchError, DispatchErrorKind, MenuError, display_args};
use crate::domain::matcher::{self, Resolution};
use crate::domain::menu::{Menu, MenuRef, OptionIdentity};
use crate::domain::render;

/// 한 단계 처리 결과. `Exited`만 반복 실행을 멈춘다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// 종료 키 입력
    Exited,
    /// 일반 옵션 액션 실행
    Dispatched,
    /// 하위 메뉴에 연결된 액션 실행
    DispatchedNested,
    /// 액션 없는 하위 메뉴를 종료될 때까지 실행
    Parked,
}

impl StepOutcome {
    pub fn should_continue(self) -> bool {
        !matches!(self, StepOutcome::Exited)
    }
}

/// 메뉴를 한 번 그리고 사용자 선택 하나를 처리한다.
#[derive(Clone, Copy)]
pub struct StepMenuUseCase<'a> {
    pub reader: &'a dyn LineReader,
    pub screen: &'a dyn ScreenClearer,
    pub output: &'a dyn MenuOutput,
    /// 액션 없는 하위 메뉴의 최대 중첩 깊이. `None`이면 제한하지 않는다.
    pub max_depth: Option<usize>,
}

impl<'a> StepMenuUseCase<'a> {
    /// 한 단계를 실행한다. 유효한 옵션이 입력될 때까지 재입력을 받는다.
    pub fn execute(&self, menu: &MenuRef) -> Result<StepOutcome, MenuError> {
        self.step_at(menu, 0)
    }

    pub(crate) fn step_at(&self, menu: &MenuRef, depth: usize) -> Result<StepOutcome, MenuError> {
        if menu.clears_screen() {
            self.clear_screen();
        }

        for line in render::menu_lines(menu) {
            self.output.emit(&line);
        }

        let identity = self.read_choice(menu)?;

        if matcher::is_exit(&identity, menu.case_rule(), menu.exit_key()) {
            debug!(menu = %menu.label(), "exit key entered");
            return Ok(StepOutcome::Exited);
        }

        match identity {
            OptionIdentity::SubMenu(nested) => self.enter_submenu(menu, &nested, depth),
            OptionIdentity::Label(label) => {
                self.dispatch_plain(menu, &label)?;
                Ok(StepOutcome::Dispatched)
            }
        }
    }

    fn clear_screen(&self) {
        if let Err(err) = self.screen.clear() {
            // 화면 지우기는 best-effort: 경고만 남기고 계속 진행한다.
            warn!("{err}");
            self.output.emit("[WARNING] Unable to clear the screen");
        }
    }

    fn read_choice(&self, menu: &Menu) -> Result<OptionIdentity, MenuError> {
        let (prompt, invalid_message) = {
            let style = menu.style();
            (
                style.input_message.clone(),
                style.invalid_option_message.clone(),
            )
        };
        let mut input = self.reader.read_line(&prompt)?;

        loop {
            match menu.resolve(&input) {
                Resolution::Matched(identity) => {
                    debug!(menu = %menu.label(), option = %identity.text(), "option resolved");
                    return Ok(identity);
                }
                Resolution::Unmatched(raw) => {
                    debug!(menu = %menu.label(), input = %raw, "no option matched");
                    self.output.emit(&invalid_message);
                    input = self.reader.read_line(&prompt)?;
                }
            }
        }
    }

    fn enter_submenu(
        &self,
        parent: &Menu,
        nested: &MenuRef,
        depth: usize,
    ) -> Result<StepOutcome, MenuError> {
        let action = parent
            .action_for(&OptionIdentity::SubMenu(nested.clone()))
            .flatten();

        if let Some(action) = action {
            self.invoke_nested(parent, nested, action)?;
            return Ok(StepOutcome::DispatchedNested);
        }

        let next_depth = depth + 1;
        if let Some(limit) = self.max_depth
            && next_depth > limit
        {
            error!(menu = %nested.label(), limit, "submenu nesting limit exceeded");
            return Err(MenuError::DepthExceeded {
                label: nested.label(),
                limit,
            });
        }

        debug!(menu = %nested.label(), depth = next_depth, "parking in submenu");
        RunMenuUseCase { step: *self }.run_at(nested, next_depth)?;
        Ok(StepOutcome::Parked)
    }

    /// 전달 인자가 있으면 `(메뉴, 인자)`, 없으면 `(메뉴)`로 호출한다.
    /// 호출 전에 액션의 arity를 확인한다.
    fn invoke_nested(
        &self,
        parent: &Menu,
        nested: &MenuRef,
        action: Action,
    ) -> Result<(), MenuError> {
        let args = parent.forwarded_args();

        let result = match action {
            Action::Menu(f) if args.is_empty() => (*f)(nested),
            Action::MenuWithArgs(f) if !args.is_empty() => (*f)(nested, args),
            other => {
                let expected = if args.is_empty() { 1 } else { 2 };
                return Err(self.dispatch_failure(
                    nested.label(),
                    args,
                    DispatchErrorKind::ArityMismatch {
                        expected,
                        found: other.arity(),
                    },
                ));
            }
        };

        result.map_err(|err| {
            self.dispatch_failure(
                nested.label(),
                args,
                DispatchErrorKind::ActionFailed(err.into()),
            )
        })
    }

    fn dispatch_plain(&self, menu: &Menu, label: &str) -> Result<(), MenuError> {
        let action = menu
            .action_for(&OptionIdentity::Label(label.to_string()))
            .flatten();

        let kind = match action {
            Some(Action::Plain(f)) => match (*f)() {
                Ok(()) => return Ok(()),
                Err(err) => DispatchErrorKind::ActionFailed(err.into()),
            },
            Some(other) => DispatchErrorKind::ArityMismatch {
                expected: 0,
                found: other.arity(),
            },
            None => DispatchErrorKind::MissingAction,
        };

        Err(self.dispatch_failure(label.to_string(), &[], kind))
    }

    /// 실패 내용을 출력/로그로 남긴 뒤 호출자에게 돌려줄 오류를 만든다.
    fn dispatch_failure(
        &self,
        identity: String,
        args: &[Value],
        kind: DispatchErrorKind,
    ) -> MenuError {
        let rendered_args = display_args(args);
        error!(option = %identity, args = %rendered_args, "{kind}");

        self.output
            .emit(&format!("[ERROR] Could not run the action for '{identity}'"));
        self.output.emit(&format!("[ERROR] {kind}"));
        self.output.emit(&format!("[ERROR] Arguments: {rendered_args}"));

        MenuError::Dispatch(DispatchError {
            identity,
            forwarded_args: args.to_vec(),
            kind,
        })
    }
}
