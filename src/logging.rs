//! tracingによるログ設定
//!
//! ユーザー向けの出力は stdout（`println!`）、診断ログは stderr に分ける。
//! ログレベルは `FOOD_ESTIMATOR_LOG` 環境変数で上書きできる。
//!
//! ```bash
//! FOOD_ESTIMATOR_LOG=debug food-estimator analyze lunch.jpg
//! ```

use crate::error::{EstimatorError, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "FOOD_ESTIMATOR_LOG";

pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| EstimatorError::Config(format!("ログ初期化に失敗: {}", e)))
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "food_estimator=debug,warn"
    } else {
        "food_estimator=warn,warn"
    }
}
