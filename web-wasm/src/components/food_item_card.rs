//! 食品1件のカード

use food_estimator_common::{render_item, FoodItem};
use leptos::prelude::*;

#[component]
pub fn FoodItemCard(item: FoodItem) -> impl IntoView {
    let card = render_item(&item);

    view! {
        <div class="food-card">
            <h3 class="food-name">{card.name.clone()}</h3>
            <div class="food-details">
                {card
                    .lines
                    .iter()
                    .map(|line| {
                        view! {
                            <p>
                                <strong>{line.label}":"</strong>
                                " "
                                {line.quantity()}
                            </p>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
