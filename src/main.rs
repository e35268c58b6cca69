use anyhow::Context;
use apic_lat::utils::{logger, validation::Validate};
use apic_lat::{CliConfig, Engine, LocalStorage};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = cli
        .into_run_config()
        .context("Failed to build run configuration")?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let engine = Engine::new(LocalStorage::new(), config);
    let mut stdout = std::io::stdout();

    match engine.run(&mut stdout) {
        Ok(summaries) => {
            for summary in &summaries {
                tracing::debug!(
                    "{}: {} row(s), {} output file(s)",
                    summary.input.display(),
                    summary.rows,
                    summary.outputs.len()
                );
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Processing failed: {} (category: {})", e, e.category());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
