//! 변환 엔진을 라이브러리로 분리하여 CLI와 GUI가 같은 화면 상태(`shell`)를 공유한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod decimal;
pub mod logging;
pub mod shell;
pub mod ui_cli;
pub mod units;
