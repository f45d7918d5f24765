//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::io;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;

use crate::domain::error::ScreenUnavailable;
use crate::domain::menu::MenuRef;

/// 사용자 입력 한 줄을 읽는 포트. 입력이 올 때까지 블로킹한다.
pub trait LineReader {
    /// 프롬프트를 보여주고 줄바꿈을 제외한 한 줄을 반환한다.
    fn read_line(&self, prompt: &str) -> io::Result<String>;
}

/// 화면 지우기 포트. 실패해도 치명적이지 않다.
pub trait ScreenClearer {
    fn clear(&self) -> Result<(), ScreenUnavailable>;
}

/// 메뉴 렌더링/진단 메시지 출력 포트.
pub trait MenuOutput {
    fn emit(&self, text: &str);
}

/// 메뉴 문서 로딩/점검 저장소 포트.
pub trait MenuRepository {
    /// 문서를 찾아 메뉴 트리로 조립한다. 액션 출력은 `output`으로 보낸다.
    fn load_tree(&self, output: Rc<dyn MenuOutput>) -> Result<MenuRef>;
    fn inspect_pretty_json(&self, output: Rc<dyn MenuOutput>) -> Result<String>;
    fn write_template(&self, path: &Path) -> Result<()>;
}
