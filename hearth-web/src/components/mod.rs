//! Reusable UI components

pub mod header;
pub mod loading;
pub mod property_card;
pub mod status_badge;
pub mod status_menu;

pub use header::Header;
pub use loading::Loading;
pub use property_card::PropertyCard;
pub use status_badge::StatusBadge;
pub use status_menu::StatusMenu;
