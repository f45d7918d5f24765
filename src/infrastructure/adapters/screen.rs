//! 화면 지우기 포트 구현 어댑터.

use std::env;
use std::io::{self, IsTerminal};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::application::ports::ScreenClearer;
use crate::domain::error::ScreenUnavailable;

/// crossterm으로 터미널 화면을 지우는 어댑터.
pub struct TerminalScreen;

impl ScreenClearer for TerminalScreen {
    fn clear(&self) -> Result<(), ScreenUnavailable> {
        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(ScreenUnavailable::new("stdout is not a terminal"));
        }

        // dumb 터미널은 제어 시퀀스를 해석하지 못한다.
        if let Ok(term) = env::var("TERM")
            && term.eq_ignore_ascii_case("dumb")
        {
            return Err(ScreenUnavailable::new("TERM=dumb"));
        }

        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)).map_err(ScreenUnavailable::new)
    }
}

/// 화면 지우기를 끈 실행(`--no-clear`)에서 쓰는 어댑터.
pub struct NoopScreen;

impl ScreenClearer for NoopScreen {
    fn clear(&self) -> Result<(), ScreenUnavailable> {
        Ok(())
    }
}
