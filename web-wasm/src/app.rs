//! メインアプリケーションコンポーネント

use crate::api::analyze::post_image;
use crate::components::{
    header::Header,
    loading_indicator::LoadingIndicator,
    results_panel::ResultsPanel,
    upload_area::UploadArea,
};
use crate::endpoint::endpoint_url;
use crate::preview::SelectedFile;
use food_estimator_common::UploadController;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 状態はコントローラ1つだけ。web_sys::File は Send でないのでローカル保持
    let controller = RwSignal::new_local(UploadController::<SelectedFile>::new());
    let endpoint = endpoint_url();

    let state = Memo::new(move |_| controller.with(|c| c.state().clone()));
    let preview_url = Memo::new(move |_| {
        controller.with(|c| c.selected().map(|s| s.url().to_string()))
    });
    let can_select = Signal::derive(move || controller.with(|c| c.can_select()));
    let can_analyze = Signal::derive(move || controller.with(|c| c.can_analyze()));
    let is_analyzing = Signal::derive(move || state.with(|s| s.is_analyzing()));

    // ファイル選択ハンドラ
    let on_file_selected = move |file: Option<File>| {
        let selected = file.and_then(|f| match SelectedFile::new(f) {
            Ok(selected) => Some(selected),
            Err(e) => {
                gloo::console::error!(format!("プレビュー作成に失敗: {:?}", e));
                None
            }
        });
        controller.update(|c| {
            c.select_file(selected);
        });
    };

    // 解析開始ハンドラ
    let on_analyze = move |_| {
        let Some(file) = controller
            .try_update(|c| c.begin_analysis().map(|s| s.file().clone()))
            .flatten()
        else {
            return;
        };

        let url = endpoint.clone();
        spawn_local(async move {
            let outcome = post_image(&url, &file).await;
            if let Err(err) = &outcome {
                gloo::console::error!(format!("解析失敗: {}", err));
            }
            controller.update(|c| {
                c.finish_analysis(outcome);
            });
        });
    };

    // 破棄時にプレビューURLを解放
    on_cleanup(move || {
        controller.try_update(|c| *c = UploadController::new());
    });

    view! {
        <div class="container">
            <Header />

            <UploadArea
                preview_url=preview_url
                can_select=can_select
                can_analyze=can_analyze
                is_analyzing=is_analyzing
                on_file_selected=on_file_selected
                on_analyze=on_analyze
            />

            <LoadingIndicator is_analyzing=is_analyzing />

            {move || {
                state
                    .with(|s| s.error().map(str::to_string))
                    .map(|message| view! { <div class="error-message">{message}</div> })
            }}

            {move || {
                state
                    .with(|s| s.result().cloned())
                    .map(|result| {
                        view! { <ResultsPanel result=result preview_url=preview_url.get() /> }
                    })
            }}
        </div>
    }
}
