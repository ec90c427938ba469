//! `/analyze` レスポンスの解釈
//!
//! トランスポート（reqwest / fetch）に依存しない部分。
//! ステータスとボディ文字列だけを受け取る。

use crate::error::AnalysisError;
use crate::types::{AnalysisResult, ErrorBody};

/// 2xx判定
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// レスポンスを解析結果またはエラーに変換
pub fn decode_response(status: u16, body: &str) -> Result<AnalysisResult, AnalysisError> {
    if is_success(status) {
        serde_json::from_str::<AnalysisResult>(body)
            .map_err(|e| AnalysisError::MalformedResponse(format!("Malformed response: {}", e)))
    } else {
        // パースできないボディは汎用文言にフォールバック
        let message = serde_json::from_str::<ErrorBody>(body).ok();
        Err(AnalysisError::rejected(
            status,
            message.as_ref().and_then(ErrorBody::message),
        ))
    }
}
