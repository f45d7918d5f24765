//! Application layer
//! 메뉴 한 단계 처리/반복 실행 유스케이스를 정의하고 포트를 통해 입출력을 사용한다.

pub mod ports;
pub mod usecases;
