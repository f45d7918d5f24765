//! Domain layer
//! 메뉴 엔티티, 입력 해석 규칙, 화면 구성 규칙을 외부 의존성 없이 표현한다.

pub mod action;
pub mod error;
pub mod matcher;
pub mod menu;
pub mod render;
