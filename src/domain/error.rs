//! 메뉴 구성/실행 오류 타입.

use std::fmt;
use std::io;

use serde_json::Value;
use thiserror::Error;

/// 메뉴 라이브러리 전체에서 사용하는 오류.
#[derive(Debug, Error)]
pub enum MenuError {
    /// 메뉴 생성 시점의 설정 검증 실패. 메뉴는 만들어지지 않는다.
    #[error("invalid parameter '{parameter}': {reason}")]
    Configuration { parameter: String, reason: String },

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// 하위 메뉴 중첩 깊이 제한 초과.
    #[error("menu '{label}' exceeds the nesting limit of {limit}")]
    DepthExceeded { label: String, limit: usize },

    #[error("failed to read user input: {0}")]
    Input(#[from] io::Error),
}

impl MenuError {
    pub fn configuration(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

/// 선택된 옵션의 액션을 실행할 수 없을 때의 오류.
#[derive(Debug, Error)]
#[error("cannot dispatch option '{identity}' (arguments: {}): {kind}", display_args(.forwarded_args))]
pub struct DispatchError {
    /// 선택된 옵션의 표시 이름(하위 메뉴는 label)
    pub identity: String,
    /// 하위 메뉴 액션에 전달하려던 인자
    pub forwarded_args: Vec<Value>,
    #[source]
    pub kind: DispatchErrorKind,
}

#[derive(Debug, Error)]
pub enum DispatchErrorKind {
    #[error("no action is registered for this option")]
    MissingAction,

    #[error("action takes {found} argument(s) but {expected} would be passed")]
    ArityMismatch { expected: usize, found: usize },

    #[error("action failed: {0}")]
    ActionFailed(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// 화면 지우기를 수행할 수 없는 환경.
#[derive(Debug, Error)]
#[error("screen clearing is unavailable: {reason}")]
pub struct ScreenUnavailable {
    pub reason: String,
}

impl ScreenUnavailable {
    pub fn new(reason: impl fmt::Display) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

/// 전달 인자를 `[a, b]` 형태로 표시한다.
pub fn display_args(args: &[Value]) -> String {
    let parts: Vec<String> = args.iter().map(Value::to_string).collect();
    format!("[{}]", parts.join(", "))
}
