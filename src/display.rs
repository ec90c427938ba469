//! 端末への表示

use food_estimator_common::{render_result, InteractionState};
use std::path::Path;

pub const RESULTS_HEADING: &str = "Analysis Results:";
pub const LOADING_MESSAGE: &str = "Processing image, please wait...";

/// 状態に応じた表示テキスト
pub fn format_state(state: &InteractionState, preview: Option<&Path>) -> String {
    match state {
        InteractionState::Idle => "No image selected.".to_string(),
        InteractionState::FileSelected => match preview {
            Some(path) => format!("Selected: {}", path.display()),
            None => "Selected.".to_string(),
        },
        InteractionState::Analyzing => LOADING_MESSAGE.to_string(),
        InteractionState::Succeeded(result) => {
            let mut text = format!("{}\n", RESULTS_HEADING);
            if let Some(path) = preview {
                text.push_str(&format!("Image: {}\n", path.display()));
            }
            text.push('\n');
            text.push_str(&render_result(result).to_string());
            text
        }
        InteractionState::Failed(message) => format!("✖ {}", message),
    }
}

pub fn print_state(state: &InteractionState, preview: Option<&Path>) {
    let text = format_state(state, preview);
    if state.error().is_some() {
        eprintln!("{}", text);
    } else {
        println!("{}", text);
    }
}
