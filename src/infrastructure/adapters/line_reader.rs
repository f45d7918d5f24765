//! 입력 포트 구현 어댑터.

use std::io::{self, Write};

use crate::application::ports::LineReader;

/// stdin에서 한 줄씩 읽는 어댑터.
pub struct StdinLineReader;

impl LineReader for StdinLineReader {
    fn read_line(&self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 {
            // 입력 스트림이 닫히면 더 이상 종료 키를 받을 수 없다.
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }

        Ok(trim_newline(line))
    }
}

fn trim_newline(mut line: String) -> String {
    while line.ends_with(['\n', '\r']) {
        line.pop();
    }
    line
}
