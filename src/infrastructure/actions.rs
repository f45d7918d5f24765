//! 설정 파일의 기본 제공 액션(say/command)을 실제 [`Action`]으로 만든다.

use std::process::Command;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::debug;

use crate::application::ports::MenuOutput;
use crate::domain::action::Action;
use crate::domain::error::display_args;
use crate::domain::menu::MenuRef;
use crate::infrastructure::config::ActionSpec;

/// 일반 라벨 옵션용 액션(인자 없음).
pub fn plain_action(spec: &ActionSpec, output: Rc<dyn MenuOutput>) -> Action {
    match spec.clone() {
        ActionSpec::Say(text) => Action::plain(move || {
            output.emit(&text);
            Ok(())
        }),
        ActionSpec::Command(argv) => Action::plain(move || run_command(&argv, &[])),
    }
}

/// 하위 메뉴 옵션용 액션. 부모 메뉴에 전달 인자가 있으면 2-인자 형태로 만든다.
pub fn submenu_action(spec: &ActionSpec, output: Rc<dyn MenuOutput>, with_args: bool) -> Action {
    match (spec.clone(), with_args) {
        (ActionSpec::Say(text), false) => Action::menu(move |menu| {
            output.emit(&expand_template(&text, menu, &[]));
            Ok(())
        }),
        (ActionSpec::Say(text), true) => Action::menu_with_args(move |menu, args| {
            output.emit(&expand_template(&text, menu, args));
            Ok(())
        }),
        (ActionSpec::Command(argv), false) => Action::menu(move |_| run_command(&argv, &[])),
        (ActionSpec::Command(argv), true) => {
            Action::menu_with_args(move |_, args| run_command(&argv, args))
        }
    }
}

/// `{label}` → 하위 메뉴 label, `{args}` → 전달 인자 목록.
fn expand_template(template: &str, menu: &MenuRef, args: &[Value]) -> String {
    template
        .replace("{label}", &menu.label())
        .replace("{args}", &display_args(args))
}

/// 외부 명령을 실행하고 종료 코드가 0이 아니면 실패로 처리한다.
pub fn run_command(argv: &[String], extra_args: &[Value]) -> Result<()> {
    let Some((program, args)) = argv.split_first() else {
        bail!("command is empty");
    };

    let extra: Vec<String> = extra_args.iter().map(arg_text).collect();
    debug!(program = %program, ?args, ?extra, "running command action");

    let status = Command::new(program)
        .args(args)
        .args(&extra)
        .status()
        .with_context(|| format!("failed to launch command: {program}"))?;

    if !status.success() {
        bail!("{program} exited with {status}");
    }
    Ok(())
}

// 문자열 인자는 따옴표 없이 그대로 넘긴다.
fn arg_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
