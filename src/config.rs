use crate::error::{EstimatorError, Result};
use food_estimator_common::{analyze_url, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 接続先を上書きする環境変数
pub const ENDPOINT_ENV: &str = "FOOD_ESTIMATOR_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 解析サービスのベースアドレス
    pub endpoint: String,
    /// 未設定ならトランスポートの既定値に任せる
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_BASE_URL.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| EstimatorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("food-estimator").join("config.json"))
    }

    /// 接続先の決定: フラグ > 環境変数 > 設定ファイル
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> String {
        let env = std::env::var(ENDPOINT_ENV).ok();
        pick_endpoint(flag, env.as_deref(), &self.endpoint)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        // 保存前に形式だけ確認
        analyze_url(&endpoint)?;
        self.endpoint = endpoint;
        Ok(())
    }
}

fn pick_endpoint(flag: Option<&str>, env: Option<&str>, file: &str) -> String {
    flag.filter(|s| !s.trim().is_empty())
        .or(env.filter(|s| !s.trim().is_empty()))
        .unwrap_or(file)
        .to_string()
}
