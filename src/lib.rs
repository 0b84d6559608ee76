//! 배출계수 조회/환산 핵심 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 다른 프런트엔드 확장도 쉽게 한다.

pub mod app;
pub mod config;
pub mod convert;
pub mod engine;
pub mod factors;
pub mod gwp;
pub mod ui_cli;
