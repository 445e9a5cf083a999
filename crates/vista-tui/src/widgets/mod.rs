mod header;
mod page;
mod popup;
pub mod sections;
mod status_bar;

pub use header::HeaderWidget;
pub use page::PageWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
