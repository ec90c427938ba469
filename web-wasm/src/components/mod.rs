pub mod food_item_card;
pub mod header;
pub mod loading_indicator;
pub mod meal_totals;
pub mod results_panel;
pub mod upload_area;
