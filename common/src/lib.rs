//! Food Estimator Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態遷移・表示整形

pub mod controller;
pub mod endpoint;
pub mod error;
pub mod render;
pub mod response;
pub mod types;

pub use controller::{AnalysisClient, InteractionState, UploadController};
pub use endpoint::{analyze_url, DEFAULT_BASE_URL, HOSTED_BASE_URL, IMAGE_FIELD};
pub use error::{AnalysisError, Error, Result, GENERIC_FAILURE_MESSAGE};
pub use render::{render_item, render_result, render_summary, to_fixed, ItemCard, ResultView, SummaryCard};
pub use response::decode_response;
pub use types::{AnalysisResult, ErrorBody, FoodItem, NutritionSummary};
