//! 배출계수 참조 테이블 모듈 모음. 모든 표는 빌드 시 포함되며 실행 중 불변이다.

pub mod fuel;
pub mod grid;
pub mod market;
