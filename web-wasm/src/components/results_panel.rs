//! 解析結果パネル: 画像＋食品カード＋合計

use crate::components::{food_item_card::FoodItemCard, meal_totals::MealTotals};
use food_estimator_common::AnalysisResult;
use leptos::prelude::*;

#[component]
pub fn ResultsPanel(result: AnalysisResult, preview_url: Option<String>) -> impl IntoView {
    let AnalysisResult { items, summary } = result;

    view! {
        <div class="results">
            <h2>"Analysis Results:"</h2>
            <div class="results-body">
                <div class="results-image">
                    {preview_url.map(|url| view! { <img src=url alt="Analyzed food" /> })}
                </div>
                <div class="results-items">
                    // サーバーの順序のまま
                    {items
                        .into_iter()
                        .map(|item| view! { <FoodItemCard item=item /> })
                        .collect_view()}
                    <MealTotals summary=summary />
                </div>
            </div>
        </div>
    }
}
