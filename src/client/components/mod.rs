pub mod alert;
pub mod article_card;
pub mod layout;
pub mod modal;
pub mod navbar;
pub mod page;
pub mod pagination;


pub use alert::{Alert, AlertKind};
pub use article_card::ArticleCard;
pub use layout::Shell;
pub use modal::{ConfirmDialog, Modal};
pub use navbar::Navbar;
pub use page::Page;
pub use pagination::Pagination;
