//! 애플리케이션 포트를 실제 입출력/파일시스템 구현체로 연결하는 어댑터 계층.

mod console_output;
mod line_reader;
mod menu_repository;
mod screen;

pub use console_output::ConsoleOutput;
pub use line_reader::StdinLineReader;
pub use menu_repository::JsonMenuRepository;
pub use screen::{NoopScreen, TerminalScreen};
