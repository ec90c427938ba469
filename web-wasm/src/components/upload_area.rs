//! アップロードエリアコンポーネント
//!
//! 解析中はファイル選択と解析ボタンの両方を無効にする。

use leptos::prelude::*;
use web_sys::{Event, File, HtmlInputElement};

#[component]
pub fn UploadArea<FS, FA>(
    preview_url: Memo<Option<String>>,
    can_select: Signal<bool>,
    can_analyze: Signal<bool>,
    is_analyzing: Signal<bool>,
    on_file_selected: FS,
    on_analyze: FA,
) -> impl IntoView
where
    FS: Fn(Option<File>) + 'static + Clone,
    FA: Fn(()) + 'static + Clone,
{
    let on_change = move |ev: Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        on_file_selected(file);
    };

    view! {
        <div class="upload-area">
            <input
                type="file"
                accept="image/*"
                disabled=move || !can_select.get()
                on:change=on_change
            />

            {move || {
                preview_url
                    .get()
                    .map(|url| view! { <img class="preview" src=url alt="Food preview" /> })
            }}

            <button
                class="btn btn-primary"
                disabled=move || !can_analyze.get()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || if is_analyzing.get() { "Analyzing..." } else { "Analyze Image" }}
            </button>
        </div>
    }
}
