pub mod modals;
pub mod page;
pub mod panels;

pub use page::{GridPage, ImagePage, Page, Pagination};
pub use panels::Intent;
