use tracing_subscriber::EnvFilter;

/// stderr 로거를 초기화한다. `RUST_LOG`가 설정되어 있으면 `default_level`보다 우선한다.
///
/// 이미 전역 구독자가 있으면(테스트 등) 아무것도 하지 않는다.
pub fn init_logger(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
