//! 食事全体の合計

use food_estimator_common::{render_summary, NutritionSummary, SummaryCard};
use leptos::prelude::*;

#[component]
pub fn MealTotals(summary: NutritionSummary) -> impl IntoView {
    let totals = render_summary(&summary);

    view! {
        <div class="meal-totals">
            <div class="meal-totals-heading">{SummaryCard::HEADING}</div>
            {totals
                .lines
                .iter()
                .map(|line| {
                    view! {
                        <div>
                            {line.label}": "
                            <b>{line.value.clone()}</b>
                            " "{line.unit}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
