//! 解析サービス呼び出し（fetch + FormData）
//!
//! Content-Type はブラウザがboundary付きで設定するので指定しない。

use food_estimator_common::{decode_response, AnalysisError, AnalysisResult, IMAGE_FIELD};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// 画像を1回だけPOSTして結果を返す
pub async fn post_image(url: &str, file: &File) -> Result<AnalysisResult, AnalysisError> {
    let (status, body) = send(url, file)
        .await
        .map_err(|e| AnalysisError::RequestFailed(describe_js_error(&e)))?;
    decode_response(status, &body)
}

async fn send(url: &str, file: &File) -> Result<(u16, String), JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// fetchの失敗は多くが TypeError("Failed to fetch")
fn describe_js_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
