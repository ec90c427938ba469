//! エラー型定義

use thiserror::Error;

/// 非2xxでメッセージが取れなかった場合の表示文言
pub const GENERIC_FAILURE_MESSAGE: &str = "Analysis failed";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 解析リクエストの失敗
///
/// `Display` の出力がそのまま画面に表示されるエラーメッセージになる。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// 接続拒否・DNS・タイムアウトなど通信レベルの失敗
    #[error("{0}")]
    RequestFailed(String),

    /// 非2xxレスポンス
    #[error("{message}")]
    ServerRejected { status: u16, message: String },

    /// 2xxだがボディがJSONでない、または形が合わない
    #[error("{0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// 非2xxレスポンス。メッセージがなければ汎用文言を使う
    pub fn rejected(status: u16, message: Option<&str>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_FAILURE_MESSAGE)
            .to_string();
        AnalysisError::ServerRejected { status, message }
    }

    /// 表示用メッセージ。空にはならない
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            match self {
                AnalysisError::RequestFailed(_) => "Request failed".to_string(),
                AnalysisError::ServerRejected { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
                AnalysisError::MalformedResponse(_) => "Malformed response".to_string(),
            }
        } else {
            message
        }
    }
}
