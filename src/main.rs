//! `menutree` 바이너리 진입점.

use menutree::interface::cli::{AppComposition, Cli, CliAction};

fn main() {
    // 메뉴가 stdout을 쓰므로 로그는 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse_action() {
        CliAction::Init(path) => {
            let composition = AppComposition::default();
            match composition.init_menu_usecase().execute(&path) {
                Ok(path) => println!("menu template written: {}", path.display()),
                Err(err) => exit_with(err),
            }
        }
        CliAction::Check(settings) => {
            let composition = AppComposition::new(settings);
            match composition.inspect_menu_usecase().execute() {
                Ok(json) => println!("{json}"),
                Err(err) => exit_with(err),
            }
        }
        CliAction::Run(settings) => {
            let composition = AppComposition::new(settings);
            let menu = match composition.load_menu_usecase().execute() {
                Ok(menu) => menu,
                Err(err) => exit_with(err),
            };
            if let Err(err) = composition.run_menu_usecase().execute(&menu) {
                exit_with(err.into());
            }
        }
    }
}

fn exit_with(err: anyhow::Error) -> ! {
    eprintln!("error: {err:#}");
    std::process::exit(1);
}
