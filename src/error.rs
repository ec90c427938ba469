use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    Http(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] food_estimator_common::Error),
}

impl From<dialoguer::Error> for EstimatorError {
    fn from(err: dialoguer::Error) -> Self {
        EstimatorError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
