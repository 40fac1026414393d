pub mod accounts;
pub mod add_article;
pub mod add_employee;
pub mod article;
pub mod department;
pub mod departments;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;

pub use accounts::{Admin, Manager};
pub use add_article::AddArticle;
pub use add_employee::AddEmployee;
pub use article::ArticleDetail;
pub use department::DepartmentDetail;
pub use departments::Departments;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
