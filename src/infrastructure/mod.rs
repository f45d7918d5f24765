//! Infrastructure layer
//! 터미널 입출력, JSON 메뉴 문서, 외부 명령 실행처럼 외부 시스템과 직접 통신하는 구현체 집합.

pub mod actions;
pub mod adapters;
pub mod config;
