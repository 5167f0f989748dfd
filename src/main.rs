/*
Description : OpenSearch / Elasticsearch 인덱스 관리 CLI
              (list, delete, close, cleanup, aliases, rollover, reindex, open, settings, shrink)
*/
use clap::Parser;

use opensearch_curator::common::*;

use opensearch_curator::controller::main_controller::*;

use opensearch_curator::enums::admin_error::*;

use opensearch_curator::env_configuration::env_config::*;

use opensearch_curator::model::{cli_args::*, configs::config::*};

use opensearch_curator::repository::es_repository::*;

use opensearch_curator::service::index_admin_service::*;

use opensearch_curator::utils_modules::logger_utils::*;

/// Unix exit code for SIGINT: 128 + 2.
const SIGINT_EXIT_CODE: i32 = 130;

#[tokio::main]
async fn main() {
    /* config 설정 전역 적용 */
    dotenv::dotenv().ok();

    let args: CliArgs = CliArgs::parse();

    /* 전역 로거설정 */
    let _logger: LoggerHandle = set_global_logger().unwrap_or_else(|e| {
        eprintln!("[main()] {:?}", e);
        std::process::exit(1);
    });

    info!("Start OpenSearch curator: {:?}", args.command);

    let cancel: CancellationToken = CancellationToken::new();
    let signal_token: CancellationToken = cancel.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("[main] Ctrl+C received, cancelling in-flight request");
            signal_token.cancel();
        }
    });

    match run(&cancel, args).await {
        Ok(()) => info!("[main] finished"),
        Err(e) => {
            error!("[main] {:?}", e);
            eprintln!("error: {:#}", e);

            let exit_code: i32 = match e.downcast_ref::<AdminError>() {
                Some(AdminError::Cancelled) => SIGINT_EXIT_CODE,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn run(cancel: &CancellationToken, args: CliArgs) -> anyhow::Result<()> {
    let config_path: String = args
        .config
        .clone()
        .unwrap_or_else(|| ADMIN_CONFIG_PATH.clone());

    let admin_config: AdminConfig = AdminConfig::load(&config_path)?;

    let es_repository: EsRepositoryImpl = initialize_es_client(admin_config.cluster())?;

    /* Dependency Injection */
    let index_admin_service: Arc<IndexAdminServiceImpl<EsRepositoryImpl>> =
        Arc::new(IndexAdminServiceImpl::new(Arc::new(es_repository)));

    let controller: MainController<IndexAdminServiceImpl<EsRepositoryImpl>> =
        MainController::new(index_admin_service);

    controller.main_task(cancel, args.command).await
}
