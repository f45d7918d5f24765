//! 출력 포트 구현 어댑터.

use crate::application::ports::MenuOutput;

/// stdout 한 줄 출력 어댑터.
pub struct ConsoleOutput;

impl MenuOutput for ConsoleOutput {
    fn emit(&self, text: &str) {
        println!("{text}");
    }
}
