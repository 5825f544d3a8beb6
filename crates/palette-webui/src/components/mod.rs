pub mod color_swatch;
pub mod export_panel;
pub mod not_found;
pub mod palette_insights;
pub mod palette_page;
pub mod toast;
