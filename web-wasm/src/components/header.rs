//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Food Calorie & Nutrition Estimator"</h1>
        </header>
    }
}
