use anyhow::Context;
use clap::Parser;
use profile_lookup::core::ConfigProvider;
use profile_lookup::utils::{logger, validation::Validate};
use profile_lookup::{CliConfig, RedisProfileLookup, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置：命令列 / 環境變數優先於 TOML 檔案
    let mut file_config = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?,
        ),
        None => None,
    };
    if let (Some(config), Some(url)) = (file_config.as_mut(), cli.store_url.as_ref()) {
        config.store.url = url.clone();
    }
    if let Some(config) = file_config.as_mut() {
        if cli.verbose {
            config.logging.level = "debug".to_string();
        }
        config.logging.json |= cli.json_logs;
    }

    match file_config {
        Some(config) => run(&config, &cli.username),
        None => run(&cli, &cli.username),
    }
}

fn run<C: ConfigProvider + Validate>(config: &C, username: &str) -> anyhow::Result<()> {
    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(config.log_level());
    }

    tracing::debug!("Store address: {}", config.store_url());

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let lookup = match RedisProfileLookup::from_config(config) {
        Ok(lookup) => lookup,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    match lookup.fetch_profile(username) {
        Ok(profile) => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Lookup failed: {} (Category: {:?})", e, e.category());
            if let Some(source) = std::error::Error::source(&e) {
                tracing::debug!("Caused by: {}", source);
            }
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
