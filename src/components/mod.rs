pub mod adjustment_slider;
pub mod app_header;
pub mod category_table;
pub mod impact_summary;
pub mod roadmap;
pub mod scenario_card;
