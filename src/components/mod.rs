//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod home_page;
mod library_page;
mod note_line;
mod shelf_modal;
mod site_footer;
mod stat_card;
mod top_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use home_page::HomePage;
pub use library_page::LibraryPage;
pub use note_line::NoteLine;
pub use shelf_modal::ShelfModal;
pub use site_footer::SiteFooter;
pub use stat_card::StatCard;
pub use top_bar::TopBar;
