//! 選択ファイルとプレビュー用Object URL
//!
//! URLは drop 時に revoke する。コントローラが画像を置き換えたとき、
//! またはコントローラ自体が破棄されたときに解放される。

use wasm_bindgen::JsValue;
use web_sys::{File, Url};

pub struct SelectedFile {
    file: File,
    url: String,
}

impl SelectedFile {
    pub fn new(file: File) -> Result<Self, JsValue> {
        let url = Url::create_object_url_with_blob(&file)?;
        Ok(Self { file, url })
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for SelectedFile {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}
