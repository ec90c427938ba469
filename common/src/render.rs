//! 解析結果の表示用フラグメント生成
//!
//! 入力のみに依存する純粋関数。CLIの端末出力とWebのカードの両方が
//! ここで作った文字列をそのまま使う。保持している数値は丸めない。

use std::fmt;

use crate::types::{AnalysisResult, FoodItem, NutritionSummary};

/// 同値判定で確認する追加桁数
const TIE_PROBE_DIGITS: usize = 25;

/// 固定小数点表記
///
/// 2進数の正確な値に最も近い `digits` 桁の10進数を選び、
/// ちょうど中間の場合は0から遠い方に丸める（`2.5` → `"3"`）。
/// `format!` の偶数丸めとはこの点だけが異なる。
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let body = if is_exact_tie(magnitude, digits) {
        let scale = 10f64.powi(digits as i32);
        let rounded_up = ((magnitude * scale).floor() + 1.0) / scale;
        format!("{:.*}", digits, rounded_up)
    } else {
        format!("{:.*}", digits, magnitude)
    };

    format!("{}{}", sign, body)
}

/// `digits` 桁目の次が「5のあと全部0」なら中間値
fn is_exact_tie(magnitude: f64, digits: usize) -> bool {
    let expanded = format!("{:.*}", digits + TIE_PROBE_DIGITS, magnitude);
    let tail = &expanded[expanded.len() - TIE_PROBE_DIGITS..];
    tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0')
}

/// ラベル・値・単位の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl Line {
    fn new(label: &'static str, value: f64, digits: usize, unit: &'static str) -> Self {
        Self {
            label,
            value: to_fixed(value, digits),
            unit,
        }
    }

    /// 値と単位（例: `"453 kcal"`）
    pub fn quantity(&self) -> String {
        format!("{} {}", self.value, self.unit)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.label, self.value, self.unit)
    }
}

/// 食品1件分のカード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub name: String,
    pub lines: [Line; 7],
}

impl fmt::Display for ItemCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for line in &self.lines {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

/// 合計値のブロック
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub lines: [Line; 4],
}

impl SummaryCard {
    pub const HEADING: &'static str = "Total for this meal:";
}

impl fmt::Display for SummaryCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::HEADING)?;
        for line in &self.lines {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

/// 解析結果全体の表示: 食品ごとのカード＋合計
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub cards: Vec<ItemCard>,
    pub summary: SummaryCard,
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{}", card)?;
        }
        write!(f, "{}", self.summary)
    }
}

/// 食品1件をカードに変換
pub fn render_item(item: &FoodItem) -> ItemCard {
    ItemCard {
        name: item.name.clone(),
        lines: [
            Line::new("Volume", item.volume_ml, 0, "mL"),
            Line::new("Weight", item.weight_g, 0, "g"),
            Line::new("Density", item.density, 2, "g/mL"),
            Line::new("Calories", item.calories, 0, "kcal"),
            Line::new("Protein", item.protein, 1, "g"),
            Line::new("Carbs", item.carbs, 1, "g"),
            Line::new("Fat", item.fat, 1, "g"),
        ],
    }
}

/// 合計値をブロックに変換
pub fn render_summary(summary: &NutritionSummary) -> SummaryCard {
    SummaryCard {
        lines: [
            Line::new("Calories", summary.total_calories, 0, "kcal"),
            Line::new("Protein", summary.total_protein, 1, "g"),
            Line::new("Carbs", summary.total_carbs, 1, "g"),
            Line::new("Fat", summary.total_fat, 1, "g"),
        ],
    }
}

/// 解析結果全体を変換（カードはレスポンス順）
pub fn render_result(result: &AnalysisResult) -> ResultView {
    ResultView {
        cards: result.items.iter().map(render_item).collect(),
        summary: render_summary(&result.summary),
    }
}
