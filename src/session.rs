//! コントローラとHTTPクライアントをまとめたCLI用セッション

use crate::display::LOADING_MESSAGE;
use crate::error::Result;
use crate::image_file::ImageFile;
use food_estimator_common::{AnalysisClient, InteractionState, UploadController};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

pub struct Session<C> {
    controller: UploadController<ImageFile>,
    client: C,
    show_progress: bool,
}

impl<C> Session<C>
where
    C: AnalysisClient<ImageFile>,
{
    pub fn new(client: C) -> Self {
        Self {
            controller: UploadController::new(),
            client,
            show_progress: false,
        }
    }

    /// 解析中にスピナーを表示する
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn state(&self) -> &InteractionState {
        self.controller.state()
    }

    pub fn preview(&self) -> Option<&Path> {
        self.controller.selected().map(ImageFile::preview)
    }

    pub fn can_select(&self) -> bool {
        self.controller.can_select()
    }

    pub fn can_analyze(&self) -> bool {
        self.controller.can_analyze()
    }

    /// ファイルを読み込んで選択する
    ///
    /// 読み込みエラーは状態を変えずに返す。
    pub fn select(&mut self, path: &Path) -> Result<bool> {
        let image = ImageFile::load(path)?;
        tracing::debug!("選択: {} ({} bytes)", image.file_name, image.bytes.len());

        let accepted = self.controller.select_file(Some(image));
        tracing::debug!("状態: {}", self.controller.state().as_str());
        Ok(accepted)
    }

    /// 1回解析する。実行されなかった場合は `false`
    pub async fn analyze(&mut self) -> bool {
        if !self.controller.can_analyze() {
            tracing::debug!("解析をスキップ: 状態={}", self.controller.state().as_str());
            return false;
        }

        let spinner = self.show_progress.then(spinner);
        let ran = self.controller.analyze_with(&self.client).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match self.controller.state() {
            InteractionState::Failed(message) => tracing::debug!("解析失敗: {}", message),
            InteractionState::Succeeded(result) => {
                tracing::debug!("解析完了: {}件", result.items.len())
            }
            _ => {}
        }
        ran
    }
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(LOADING_MESSAGE);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
