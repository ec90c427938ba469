//! 解析サービスの接続先

use crate::error::{Error, Result};

/// 開発用サーバー
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// ホスティング版
pub const HOSTED_BASE_URL: &str = "https://food-calorie-estimator-xi58.onrender.com";

/// 解析エンドポイントのパス
pub const ANALYZE_PATH: &str = "/analyze";

/// マルチパートのフィールド名
pub const IMAGE_FIELD: &str = "image";

/// ベースアドレスから `/analyze` のURLを作る
///
/// 末尾のスラッシュは除去し、すでに `/analyze` で終わっていればそのまま使う。
pub fn analyze_url(base: &str) -> Result<String> {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::Config("endpoint is empty".into()));
    }

    if trimmed.ends_with(ANALYZE_PATH) {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{}{}", trimmed, ANALYZE_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_url_appends_path() {
        assert_eq!(analyze_url(DEFAULT_BASE_URL).unwrap(), "http://localhost:5000/analyze");
    }

    #[test]
    fn test_analyze_url_trims_trailing_slash() {
        assert_eq!(
            analyze_url("https://example.com/api//").unwrap(),
            "https://example.com/api/analyze"
        );
    }

    #[test]
    fn test_analyze_url_keeps_full_url() {
        assert_eq!(
            analyze_url("https://example.com/analyze/").unwrap(),
            "https://example.com/analyze"
        );
    }

    #[test]
    fn test_analyze_url_rejects_empty() {
        assert!(matches!(analyze_url("  "), Err(Error::Config(_))));
    }
}
