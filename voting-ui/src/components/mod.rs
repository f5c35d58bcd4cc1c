mod category_card;
mod error_display;
mod loading_spinner;
mod result_tile;
mod status_message;
mod user_badge;

pub use category_card::CategoryCard;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use result_tile::ResultTile;
pub use status_message::StatusMessage;
pub use user_badge::UserBadge;
