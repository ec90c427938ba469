//! 対話式の選択・解析ループ

use crate::display::print_state;
use crate::error::Result;
use crate::image_file::ImageFile;
use crate::session::Session;
use dialoguer::{Input, Select};
use food_estimator_common::AnalysisClient;
use std::path::PathBuf;

/// メニュー操作
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    /// 画像を選ぶ
    SelectImage,
    /// 解析する
    Analyze,
    /// 現在の状態を表示
    Show,
    /// 終了
    Quit,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::SelectImage => "Select image",
            MenuAction::Analyze => "Analyze image",
            MenuAction::Show => "Show current state",
            MenuAction::Quit => "Quit",
        }
    }
}

/// 現在選べる操作
///
/// 解析中は選択も解析も出さない。画像未選択なら解析を出さない。
pub fn available_actions(can_select: bool, can_analyze: bool) -> Vec<MenuAction> {
    let mut actions = Vec::new();
    if can_select {
        actions.push(MenuAction::SelectImage);
    }
    if can_analyze {
        actions.push(MenuAction::Analyze);
    }
    actions.push(MenuAction::Show);
    actions.push(MenuAction::Quit);
    actions
}

pub async fn run_interactive<C>(session: &mut Session<C>) -> Result<()>
where
    C: AnalysisClient<ImageFile>,
{
    println!("🍽  Food Calorie & Nutrition Estimator\n");

    loop {
        let actions = available_actions(session.can_select(), session.can_analyze());
        let labels: Vec<&str> = actions.iter().map(MenuAction::label).collect();

        let choice = Select::new()
            .with_prompt("操作を選択")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            MenuAction::SelectImage => {
                let input: String = Input::new()
                    .with_prompt("画像ファイルのパス")
                    .interact_text()?;
                let path = PathBuf::from(input.trim());

                match session.select(&path) {
                    Ok(_) => print_state(session.state(), session.preview()),
                    Err(e) => eprintln!("✖ {}", e),
                }
            }
            MenuAction::Analyze => {
                session.analyze().await;
                print_state(session.state(), session.preview());
            }
            MenuAction::Show => print_state(session.state(), session.preview()),
            MenuAction::Quit => break,
        }
        println!();
    }

    Ok(())
}
