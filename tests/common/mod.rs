#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;

use menutree::{LineReader, MenuOutput, ScreenClearer, ScreenUnavailable, StepMenuUseCase};

/// 미리 정해둔 입력을 순서대로 돌려준다. 다 쓰면 EOF.
pub struct ScriptedReader {
    inputs: RefCell<VecDeque<String>>,
    pub prompts: RefCell<Vec<String>>,
}

impl ScriptedReader {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: RefCell::new(inputs.iter().map(|s| s.to_string()).collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.inputs.borrow().len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&self, prompt: &str) -> io::Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.inputs
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

#[derive(Default)]
pub struct RecordingOutput {
    pub lines: RefCell<Vec<String>>,
}

impl RecordingOutput {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn count(&self, line: &str) -> usize {
        self.lines.borrow().iter().filter(|l| *l == line).count()
    }
}

impl MenuOutput for RecordingOutput {
    fn emit(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

pub struct FakeScreen {
    available: bool,
    pub clears: Cell<usize>,
}

impl FakeScreen {
    pub fn available() -> Self {
        Self {
            available: true,
            clears: Cell::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            clears: Cell::new(0),
        }
    }
}

impl ScreenClearer for FakeScreen {
    fn clear(&self) -> Result<(), ScreenUnavailable> {
        if !self.available {
            return Err(ScreenUnavailable::new("not a terminal"));
        }
        self.clears.set(self.clears.get() + 1);
        Ok(())
    }
}

pub fn step_usecase<'a>(
    reader: &'a ScriptedReader,
    screen: &'a FakeScreen,
    output: &'a RecordingOutput,
    max_depth: Option<usize>,
) -> StepMenuUseCase<'a> {
    StepMenuUseCase {
        reader,
        screen,
        output,
        max_depth,
    }
}
