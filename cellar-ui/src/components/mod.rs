//! Reusable Dioxus RSX components for the cellar pages.

mod chart_container;
mod dark_mode_toggle;
mod error_display;
mod filter_select;
mod loading_spinner;
mod page_header;
mod search_box;
mod summary_cards;

pub use chart_container::ChartContainer;
pub use dark_mode_toggle::DarkModeToggle;
pub use error_display::ErrorDisplay;
pub use filter_select::FilterSelect;
pub use loading_spinner::LoadingSpinner;
pub use page_header::PageHeader;
pub use search_box::SearchBox;
pub use summary_cards::SummaryCards;
