//! アップロード〜解析〜表示の状態遷移
//!
//! ```text
//! Idle ──select──▶ FileSelected ──analyze──▶ Analyzing ──▶ Succeeded / Failed
//!                      ▲                                        │
//!                      └──────────────── select ────────────────┘
//! ```
//!
//! I/Oは持たない。`begin_analysis` で遷移して送信対象を渡し、
//! レスポンスが来たら `finish_analysis` に渡す。通信の実体は各フロントエンドが持つ。

use crate::error::AnalysisError;
use crate::types::AnalysisResult;

/// 画面の状態
///
/// 遷移のたびに丸ごと置き換える。
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    FileSelected,
    Analyzing,
    Succeeded(AnalysisResult),
    Failed(String),
}

impl InteractionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::FileSelected => "file-selected",
            InteractionState::Analyzing => "analyzing",
            InteractionState::Succeeded(_) => "succeeded",
            InteractionState::Failed(_) => "failed",
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, InteractionState::Analyzing)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            InteractionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            InteractionState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// 解析サービスへの送信
///
/// `S` は選択中の画像（ファイル本体とプレビュー参照を持つ型）。
#[allow(async_fn_in_trait)]
pub trait AnalysisClient<S> {
    /// 1回だけ送信する。リトライしない
    async fn analyze(&self, image: &S) -> Result<AnalysisResult, AnalysisError>;
}

/// アップロードコントローラ
///
/// 選択中の画像を唯一所有する。画像が置き換わるかコントローラが破棄されると
/// 古い画像は drop され、プレビュー参照はその `Drop` で解放される。
#[derive(Debug)]
pub struct UploadController<S> {
    state: InteractionState,
    selected: Option<S>,
}

impl<S> Default for UploadController<S> {
    fn default() -> Self {
        Self {
            state: InteractionState::Idle,
            selected: None,
        }
    }
}

impl<S> UploadController<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn selected(&self) -> Option<&S> {
        self.selected.as_ref()
    }

    /// 解析中はファイル選択を受け付けない
    pub fn can_select(&self) -> bool {
        !self.state.is_analyzing()
    }

    /// 解析ボタンの有効判定
    pub fn can_analyze(&self) -> bool {
        self.selected.is_some() && !self.state.is_analyzing()
    }

    /// ファイル選択
    ///
    /// 前回の結果・エラーを捨て、画像を置き換えて `FileSelected` にする。
    /// ファイルなし、または解析中は何もせず `false` を返す。
    pub fn select_file(&mut self, file: Option<S>) -> bool {
        let Some(file) = file else {
            return false;
        };
        if !self.can_select() {
            return false;
        }

        self.state = InteractionState::FileSelected;
        self.selected = Some(file);
        true
    }

    /// 解析開始
    ///
    /// `Analyzing` に遷移し、送信すべき画像を返す。
    /// 画像未選択または解析中なら状態を変えずに `None`。
    pub fn begin_analysis(&mut self) -> Option<&S> {
        if !self.can_analyze() {
            return None;
        }

        self.state = InteractionState::Analyzing;
        self.selected.as_ref()
    }

    /// 解析完了
    ///
    /// `Analyzing` 以外で呼ばれた場合は無視して `false`。
    pub fn finish_analysis(&mut self, outcome: Result<AnalysisResult, AnalysisError>) -> bool {
        if !self.state.is_analyzing() {
            return false;
        }

        self.state = match outcome {
            Ok(result) => InteractionState::Succeeded(result),
            Err(err) => InteractionState::Failed(err.user_message()),
        };
        true
    }

    /// 開始から完了までをクライアント経由で実行
    ///
    /// 実行されなかった場合（未選択・解析中）は `false`。
    pub async fn analyze_with<C>(&mut self, client: &C) -> bool
    where
        C: AnalysisClient<S>,
    {
        let Some(image) = self.begin_analysis() else {
            return false;
        };
        let outcome = client.analyze(image).await;
        self.finish_analysis(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FoodItem, NutritionSummary};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// drop回数を数えるテスト用画像
    struct TestImage {
        name: &'static str,
        released: Rc<Cell<usize>>,
    }

    impl TestImage {
        fn new(name: &'static str, released: &Rc<Cell<usize>>) -> Self {
            Self {
                name,
                released: Rc::clone(released),
            }
        }
    }

    impl Drop for TestImage {
        fn drop(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    /// 決まった結果を返すクライアント
    struct FixedClient {
        outcome: Result<AnalysisResult, AnalysisError>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl FixedClient {
        fn new(outcome: Result<AnalysisResult, AnalysisError>) -> Self {
            Self {
                outcome,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl AnalysisClient<TestImage> for FixedClient {
        async fn analyze(&self, image: &TestImage) -> Result<AnalysisResult, AnalysisError> {
            self.calls.borrow_mut().push(image.name);
            self.outcome.clone()
        }
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            items: vec![FoodItem {
                name: "toast".into(),
                calories: 120.0,
                ..Default::default()
            }],
            summary: NutritionSummary {
                total_calories: 120.0,
                ..Default::default()
            },
        }
    }

    fn counter() -> Rc<Cell<usize>> {
        Rc::new(Cell::new(0))
    }

    #[test]
    fn test_initial_state_is_idle() {
        let controller = UploadController::<TestImage>::new();
        assert_eq!(controller.state(), &InteractionState::Idle);
        assert!(controller.selected().is_none());
        assert!(!controller.can_analyze());
    }

    #[test]
    fn test_select_none_is_noop() {
        let mut controller = UploadController::<TestImage>::new();
        assert!(!controller.select_file(None));
        assert_eq!(controller.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_select_file_enters_file_selected() {
        let released = counter();
        let mut controller = UploadController::new();
        assert!(controller.select_file(Some(TestImage::new("a.jpg", &released))));
        assert_eq!(controller.state(), &InteractionState::FileSelected);
        assert_eq!(controller.selected().map(|i| i.name), Some("a.jpg"));
        assert!(controller.can_analyze());
    }

    #[test]
    fn test_analyze_without_file_is_noop() {
        let mut controller = UploadController::<TestImage>::new();
        assert!(controller.begin_analysis().is_none());
        assert_eq!(controller.state(), &InteractionState::Idle);

        let client = FixedClient::new(Ok(sample_result()));
        assert!(!block_on(controller.analyze_with(&client)));
        assert!(client.calls.borrow().is_empty());
        assert_eq!(controller.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_successful_analysis() {
        let released = counter();
        let mut controller = UploadController::new();
        controller.select_file(Some(TestImage::new("a.jpg", &released)));

        let client = FixedClient::new(Ok(sample_result()));
        assert!(block_on(controller.analyze_with(&client)));
        assert_eq!(client.calls.borrow().as_slice(), &["a.jpg"]);
        assert_eq!(controller.state().result(), Some(&sample_result()));
        assert!(controller.state().error().is_none());
    }

    #[test]
    fn test_failed_analysis_stores_message() {
        let released = counter();
        let mut controller = UploadController::new();
        controller.select_file(Some(TestImage::new("a.jpg", &released)));

        let client = FixedClient::new(Err(AnalysisError::rejected(400, Some("no food detected"))));
        block_on(controller.analyze_with(&client));
        assert_eq!(controller.state().error(), Some("no food detected"));
        assert!(controller.state().result().is_none());
    }

    #[test]
    fn test_stays_analyzing_until_outcome_observed() {
        let released = counter();
        let mut controller = UploadController::new();
        controller.select_file(Some(TestImage::new("a.jpg", &released)));

        assert!(controller.begin_analysis().is_some());
        assert!(controller.state().is_analyzing());
        assert!(!controller.can_analyze());

        controller.finish_analysis(Err(AnalysisError::RequestFailed(String::new())));
        let message = controller.state().error().unwrap();
        assert!(!message.is_empty());
    }

    #[test]
    fn test_analyze_clears_previous_error() {
        let released = counter();
        let mut controller = UploadController::new();
        controller.select_file(Some(TestImage::new("a.jpg", &released)));
        controller.begin_analysis();
        controller.finish_analysis(Err(AnalysisError::RequestFailed("offline".into())));
        assert_eq!(controller.state().error(), Some("offline"));

        controller.begin_analysis();
        assert_eq!(controller.state(), &InteractionState::Analyzing);
        assert!(controller.state().error().is_none());
    }

    #[test]
    fn test_reentrant_analyze_is_rejected() {
        let released = counter();
        let mut controller = UploadController::new();
        controller.select_file(Some(TestImage::new("a.jpg", &released)));
        assert!(controller.begin_analysis().is_some());
        assert!(controller.begin_analysis().is_none());
        assert!(controller.state().is_analyzing());
    }

    #[test]
    fn test_select_during_analysis_is_rejected() {
        let released = counter();
        let mut controller = UploadController::new();
        controller.select_file(Some(TestImage::new("a.jpg", &released)));
        controller.begin_analysis();

        assert!(!controller.select_file(Some(TestImage::new("b.jpg", &released))));
        assert!(controller.state().is_analyzing());
        assert_eq!(controller.selected().map(|i| i.name), Some("a.jpg"));
        // 受け付けなかった画像は即座に解放される
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_reselect_clears_result_immediately() {
        let released = counter();
        let mut controller = UploadController::new();
        controller.select_file(Some(TestImage::new("a.jpg", &released)));
        controller.begin_analysis();
        controller.finish_analysis(Ok(sample_result()));
        assert!(controller.state().result().is_some());

        controller.select_file(Some(TestImage::new("b.jpg", &released)));
        assert_eq!(controller.state(), &InteractionState::FileSelected);
        assert!(controller.state().result().is_none());
    }

    #[test]
    fn test_reselect_releases_previous_preview() {
        let released = counter();
        let mut controller = UploadController::new();
        controller.select_file(Some(TestImage::new("a.jpg", &released)));
        controller.select_file(Some(TestImage::new("b.jpg", &released)));
        controller.select_file(Some(TestImage::new("c.jpg", &released)));
        assert_eq!(released.get(), 2);

        drop(controller);
        assert_eq!(released.get(), 3);
    }

    #[test]
    fn test_finish_without_analysis_is_ignored() {
        let released = counter();
        let mut controller = UploadController::new();
        controller.select_file(Some(TestImage::new("a.jpg", &released)));
        assert!(!controller.finish_analysis(Ok(sample_result())));
        assert_eq!(controller.state(), &InteractionState::FileSelected);
    }

    #[test]
    fn test_state_names() {
        assert_eq!(InteractionState::Idle.as_str(), "idle");
        assert_eq!(InteractionState::Failed("x".into()).as_str(), "failed");
    }
}
