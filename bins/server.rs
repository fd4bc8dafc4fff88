use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // load .env first so RUST_LOG / LOG_FORMAT apply
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "employee-api", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "employee-api",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(
                service = "employee-api",
                event = "config_invalid",
                error = %e,
                "configuration rejected"
            );
            return std::process::ExitCode::FAILURE;
        }
    };
    let worker_threads = cfg.server.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(
                service = "employee-api",
                event = "runtime_build_failed",
                error = %e,
                "failed to build tokio runtime"
            );
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "employee-api",
        event = "start",
        %service_id,
        pid,
        version,
        upstream = %cfg.upstream.base_url,
        threads = worker_threads.unwrap_or_default(),
        "employee api starting"
    );

    rt.block_on(async move {
        let server_task = tokio::spawn(server::startup::run_with_config(cfg));

        tokio::select! {
            res = server_task => {
                match res {
                    Ok(Ok(())) => {
                        info!(
                            service = "employee-api",
                            event = "stop",
                            %service_id,
                            pid,
                            "server stopped normally"
                        );
                        std::process::ExitCode::SUCCESS
                    }
                    Ok(Err(e)) => {
                        error!(
                            service = "employee-api",
                            event = "run_failed",
                            error = %e,
                            "server returned error"
                        );
                        std::process::ExitCode::FAILURE
                    }
                    Err(e) => {
                        error!(
                            service = "employee-api",
                            event = "task_join_error",
                            error = %e,
                            "server task join error"
                        );
                        std::process::ExitCode::FAILURE
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!(
                    service = "employee-api",
                    event = "shutdown_signal",
                    %service_id,
                    pid,
                    "received Ctrl+C, shutting down"
                );
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
