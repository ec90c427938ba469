//! 選択された画像ファイル
//!
//! CLIでのプレビュー参照はファイルの絶対パス。
//! 種類・サイズの検証はしない（拡張子が画像でなければ警告のみ）。

use crate::error::{EstimatorError, Result};
use image::ImageFormat;
use std::path::{Path, PathBuf};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(EstimatorError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| EstimatorError::ImageLoad(format!("{}: {}", path.display(), e)))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !looks_like_image(&path) {
            tracing::warn!("画像の拡張子ではありません: {}", path.display());
        }

        Ok(Self {
            mime_type: mime_type_for(&path).to_string(),
            path,
            file_name,
            bytes,
        })
    }

    /// 画面表示用の参照
    pub fn preview(&self) -> &Path {
        &self.path
    }
}

impl Drop for ImageFile {
    fn drop(&mut self) {
        tracing::debug!("プレビュー解放: {}", self.path.display());
    }
}

/// 拡張子から判定したMIMEタイプ
pub fn mime_type_for(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|f| f.to_mime_type())
        .unwrap_or(FALLBACK_MIME_TYPE)
}

/// `image/*` 相当の判定
pub fn looks_like_image(path: &Path) -> bool {
    mime_type_for(path).starts_with("image/")
}
