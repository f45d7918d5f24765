//! Interface layer
//! CLI 진입점과 의존성 조립을 담당한다.

pub mod cli;
