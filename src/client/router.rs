use dioxus::prelude::*;

use crate::client::{
    components::Shell,
    routes::{
        AddArticle, AddEmployee, Admin, ArticleDetail, DepartmentDetail, Departments, Home, Login,
        Manager, NotFound, Register,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]

    #[route("/")]
    Home {},

    #[route("/article/:id")]
    ArticleDetail { id: i32 },

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/add-article")]
    AddArticle {},

    #[route("/add-employee")]
    AddEmployee {},

    #[route("/departments")]
    Departments {},

    #[route("/department/:id")]
    DepartmentDetail { id: i32 },

    #[route("/admin")]
    Admin {},

    #[route("/manager")]
    Manager {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
