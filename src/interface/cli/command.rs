//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// 바이너리 기본 하위 메뉴 중첩 제한.
pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, Parser)]
#[command(name = "menutree")]
#[command(about = "Run a nested text menu declared in a JSON document")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Menu document path (overrides MENUTREE_CONFIG and default locations)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum nesting depth for submenus without an action
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, conflicts_with = "no_depth_limit")]
    max_depth: usize,

    /// Allow unbounded submenu nesting
    #[arg(long)]
    no_depth_limit: bool,

    /// Never clear the screen, even for menus that request it
    #[arg(long)]
    no_clear: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate the menu document and print what would be loaded
    Check,
    /// Write the built-in demo menu document
    Init {
        /// Target path
        #[arg(default_value = ".menutree/menu.json")]
        path: PathBuf,
    },
}

/// 메뉴 실행 설정.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSettings {
    pub config: Option<PathBuf>,
    pub max_depth: Option<usize>,
    pub clear_screen: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Run(RunSettings),
    Check(RunSettings),
    Init(PathBuf),
}

impl Cli {
    /// 인자 오류/도움말은 clap이 직접 출력하고 종료한다.
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        let settings = RunSettings {
            config: self.config,
            max_depth: (!self.no_depth_limit).then_some(self.max_depth),
            clear_screen: !self.no_clear,
        };

        match self.command {
            None => CliAction::Run(settings),
            Some(Commands::Check) => CliAction::Check(settings),
            Some(Commands::Init { path }) => CliAction::Init(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(args: &[&str]) -> CliAction {
        Cli::try_parse_from(args).unwrap().into_action()
    }

    #[test]
    fn defaults_run_with_depth_limit_and_clearing() {
        assert_eq!(
            action(&["menutree"]),
            CliAction::Run(RunSettings {
                config: None,
                max_depth: Some(DEFAULT_MAX_DEPTH),
                clear_screen: true,
            })
        );
    }

    #[test]
    fn flags_map_to_settings() {
        assert_eq!(
            action(&["menutree", "--config", "m.json", "--no-depth-limit", "--no-clear"]),
            CliAction::Run(RunSettings {
                config: Some(PathBuf::from("m.json")),
                max_depth: None,
                clear_screen: false,
            })
        );
    }

    #[test]
    fn subcommands() {
        assert!(matches!(
            action(&["menutree", "check", "--config", "x.json"]),
            CliAction::Check(RunSettings { config: Some(_), .. })
        ));
        assert_eq!(
            action(&["menutree", "init"]),
            CliAction::Init(PathBuf::from(".menutree/menu.json"))
        );
    }

    #[test]
    fn depth_flags_conflict() {
        assert!(Cli::try_parse_from(["menutree", "--max-depth", "3", "--no-depth-limit"]).is_err());
    }
}
