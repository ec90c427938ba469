use anyhow::Context;
use clap::Parser;
use food_estimator::{cli, client, config, display, interactive, logging, session};
use cli::{Cli, Commands, OutputFormat};
use client::HttpAnalysisClient;
use config::Config;
use food_estimator_common::{analyze_url, InteractionState};
use session::Session;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    let config = Config::load().context("設定ファイルの読み込みに失敗")?;

    match cli.command {
        Commands::Analyze { image, endpoint, format, output } => {
            let base = config.resolve_endpoint(endpoint.as_deref());
            let client = HttpAnalysisClient::new(&base, config.timeout())?;
            tracing::info!("接続先: {}", client.url());

            let mut session = Session::new(client).with_progress(format == OutputFormat::Text);
            session
                .select(&image)
                .with_context(|| format!("画像を選択できません: {}", image.display()))?;
            session.analyze().await;

            let InteractionState::Succeeded(result) = session.state() else {
                display::print_state(session.state(), session.preview());
                return Ok(ExitCode::FAILURE);
            };

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(result)?;
                std::fs::write(&path, json)
                    .with_context(|| format!("保存に失敗: {}", path.display()))?;
                tracing::info!("結果を保存: {}", path.display());
            }

            match format {
                OutputFormat::Text => display::print_state(session.state(), session.preview()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
            }
        }

        Commands::Interactive { endpoint } => {
            let base = config.resolve_endpoint(endpoint.as_deref());
            let client = HttpAnalysisClient::new(&base, config.timeout())?;
            println!("接続先: {}", client.url());

            let mut session = Session::new(client).with_progress(true);
            interactive::run_interactive(&mut session).await?;
        }

        Commands::Config { set_endpoint, set_timeout, clear_timeout, show } => {
            let mut config = config;
            let changed = set_endpoint.is_some() || set_timeout.is_some() || clear_timeout;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ 接続先を設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.timeout_seconds = Some(seconds);
                println!("✔ タイムアウトを設定しました");
            } else if clear_timeout {
                config.timeout_seconds = None;
                println!("✔ タイムアウトを解除しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  接続先: {}", config.endpoint);
                println!("  解析URL: {}", analyze_url(&config.resolve_endpoint(None))?);
                match config.timeout_seconds {
                    Some(seconds) => println!("  タイムアウト: {}秒", seconds),
                    None => println!("  タイムアウト: なし"),
                }
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
