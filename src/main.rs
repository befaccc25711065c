use std::process::ExitCode;

use clap::Parser;
use unit_converter::{app, cli::Cli, config, logging};

/// CLI 엔트리 포인트. 설정을 로드하고 로거를 초기화한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_or_create(&cli.config)?;
    logging::init_logger(cli.log_level.as_deref().unwrap_or(&cfg.log_level));
    app::run(cli, &cfg)?;
    Ok(())
}
