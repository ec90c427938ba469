//! 解析中表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(is_analyzing: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || is_analyzing.get()>
            <div class="loading-indicator">"Processing image, please wait..."</div>
        </Show>
    }
}
