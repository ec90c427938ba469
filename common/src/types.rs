//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - FoodItem: 認識された食品1件分の推定値
//! - NutritionSummary: 全食品の合計値
//! - AnalysisResult: `/analyze` の成功レスポンス
//! - ErrorBody: 失敗レスポンス

use serde::{Deserialize, Serialize};

/// 食品1件の推定値
///
/// 数値はすべて表示専用。クライアント側で再計算・検証はしない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub volume_ml: f64,
    pub weight_g: f64,
    /// g/mL
    pub density: f64,
    /// kcal
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// 食事全体の合計値
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

/// 解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// サーバーが返した順序のまま保持する
    pub items: Vec<FoodItem>,
    pub summary: NutritionSummary,
}

/// 非2xxレスポンスのボディ
///
/// `error` が文字列以外の場合も受け入れ、メッセージなしとして扱う。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ErrorBody {
    /// 空でない文字列メッセージのみ返す
    pub fn message(&self) -> Option<&str> {
        match &self.error {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "items": [
            {"name": "rice", "volume_ml": 180.4, "weight_g": 150.2, "density": 0.834,
             "calories": 195.3, "protein": 4.05, "carbs": 42.9, "fat": 0.44},
            {"name": "egg", "volume_ml": 55, "weight_g": 50, "density": 0.91,
             "calories": 77, "protein": 6.3, "carbs": 0.6, "fat": 5.3}
        ],
        "summary": {"total_calories": 272.3, "total_protein": 10.35,
                    "total_carbs": 43.5, "total_fat": 5.74}
    }"#;

    #[test]
    fn test_parse_analysis_result() {
        let result: AnalysisResult = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].name, "rice");
        assert_eq!(result.items[1].name, "egg");
        // 整数表記も f64 として受け取れる
        assert_eq!(result.items[1].volume_ml, 55.0);
        assert_eq!(result.summary.total_fat, 5.74);
    }

    #[test]
    fn test_parse_missing_summary_fails() {
        let json = r#"{"items": []}"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "no food detected"}"#).unwrap();
        assert_eq!(body.message(), Some("no food detected"));
    }

    #[test]
    fn test_error_body_empty_or_non_string() {
        let empty: ErrorBody = serde_json::from_str(r#"{"error": ""}"#).unwrap();
        assert_eq!(empty.message(), None);

        let number: ErrorBody = serde_json::from_str(r#"{"error": 42}"#).unwrap();
        assert_eq!(number.message(), None);

        let missing: ErrorBody = serde_json::from_str(r#"{"detail": "x"}"#).unwrap();
        assert_eq!(missing.message(), None);
    }
}
