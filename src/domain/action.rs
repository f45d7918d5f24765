//! 옵션에 연결되는 호출 가능한 액션.

use std::fmt;
use std::rc::Rc;

use anyhow::Result;
use serde_json::Value;

use crate::domain::menu::MenuRef;

type PlainFn = dyn Fn() -> Result<()>;
type MenuFn = dyn Fn(&MenuRef) -> Result<()>;
type MenuArgsFn = dyn Fn(&MenuRef, &[Value]) -> Result<()>;

/// 선택 시 호출되는 액션. 인자 개수(arity)가 타입으로 드러난다.
///
/// - `Plain`: 일반 라벨 옵션용, 인자 없음
/// - `Menu`: 하위 메뉴 옵션용, 선택된 메뉴 하나
/// - `MenuWithArgs`: 하위 메뉴 옵션용, 선택된 메뉴 + 전달 인자
#[derive(Clone)]
pub enum Action {
    Plain(Rc<PlainFn>),
    Menu(Rc<MenuFn>),
    MenuWithArgs(Rc<MenuArgsFn>),
}

impl Action {
    pub fn plain(f: impl Fn() -> Result<()> + 'static) -> Self {
        Self::Plain(Rc::new(f))
    }

    pub fn menu(f: impl Fn(&MenuRef) -> Result<()> + 'static) -> Self {
        Self::Menu(Rc::new(f))
    }

    pub fn menu_with_args(f: impl Fn(&MenuRef, &[Value]) -> Result<()> + 'static) -> Self {
        Self::MenuWithArgs(Rc::new(f))
    }

    /// 액션이 받는 인자 수.
    pub fn arity(&self) -> usize {
        match self {
            Action::Plain(_) => 0,
            Action::Menu(_) => 1,
            Action::MenuWithArgs(_) => 2,
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Action::Plain(_) => "Plain",
            Action::Menu(_) => "Menu",
            Action::MenuWithArgs(_) => "MenuWithArgs",
        };
        write!(f, "Action::{kind}/{}", self.arity())
    }
}
