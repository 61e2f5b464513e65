use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // 提前加载 .env，使得 RUST_LOG / LOG_FORMAT 等环境变量生效
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "todo-api", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    // 基础服务上下文（不含敏感信息）
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic 钩子：捕获异常并输出错误日志
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "todo-api",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // 配置：优先 config.toml，其次环境变量
    let cfg = match configs::AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "todo-api", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    let worker_threads = cfg.server.worker_threads;

    // 构建 Tokio 运行时（允许根据配置调整线程数）
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "todo-api", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "todo-api",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "todo api starting"
    );

    // Ctrl+C 由 server 内部的 with_graceful_shutdown 处理
    match rt.block_on(server::run_with_config(cfg)) {
        Ok(()) => {
            info!(service = "todo-api", event = "stop", %service_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "todo-api", event = "run_failed", error = %e, "server exited with error");
            std::process::ExitCode::FAILURE
        }
    }
}
