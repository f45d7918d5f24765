pub mod init_menu;
pub mod inspect_menu;
pub mod load_menu;
pub mod run_menu;
pub mod step_menu;
