//! Role dependent navigation.
//!
//! The role only decides which links are rendered; the backend enforces access on every
//! request.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBuilding, FaCirclePlus, FaHouse, FaUserPlus, FaUserShield, FaUserTie,
};
use dioxus_free_icons::Icon;

use crate::{client::router::Route, model::user::Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Departments,
    Administration,
    Management,
    AddArticle,
    AddEmployee,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
    pub icon: NavIcon,
}

impl NavLink {
    fn new(label: &'static str, route: Route, icon: NavIcon) -> Self {
        Self { label, route, icon }
    }
}

/// Links shown for `role`, `None` meaning nobody is signed in.
pub fn nav_links(role: Option<Role>) -> Vec<NavLink> {
    let mut links = vec![
        NavLink::new("Home", Route::Home {}, NavIcon::Home),
        NavLink::new("Departments", Route::Departments {}, NavIcon::Departments),
    ];

    match role {
        Some(Role::Admin) => links.extend([
            NavLink::new("Administration", Route::Admin {}, NavIcon::Administration),
            NavLink::new("Add article", Route::AddArticle {}, NavIcon::AddArticle),
            NavLink::new("Add employee", Route::AddEmployee {}, NavIcon::AddEmployee),
        ]),
        Some(Role::Manager) => links.extend([
            NavLink::new("Management", Route::Manager {}, NavIcon::Management),
            NavLink::new("Add article", Route::AddArticle {}, NavIcon::AddArticle),
        ]),
        Some(Role::User) | None => {}
    }

    links
}

fn link_class(active: bool) -> &'static str {
    if active {
        "active flex gap-2"
    } else {
        "flex gap-2"
    }
}

#[component]
fn NavIconView(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx!(Icon { width: 16, height: 16, icon: FaHouse }),
        NavIcon::Departments => rsx!(Icon { width: 16, height: 16, icon: FaBuilding }),
        NavIcon::Administration => rsx!(Icon { width: 16, height: 16, icon: FaUserShield }),
        NavIcon::Management => rsx!(Icon { width: 16, height: 16, icon: FaUserTie }),
        NavIcon::AddArticle => rsx!(Icon { width: 16, height: 16, icon: FaCirclePlus }),
        NavIcon::AddEmployee => rsx!(Icon { width: 16, height: 16, icon: FaUserPlus }),
    }
}

#[component]
pub fn Navbar(role: Option<Role>) -> Element {
    let current = use_route::<Route>();

    rsx!(
        nav { class: "w-60 shrink-0 bg-base-200 min-h-screen pt-[64px]",
            ul { class: "menu p-2 gap-1",
                for link in nav_links(role) {
                    li { key: "{link.route}",
                        Link {
                            to: link.route.clone(),
                            class: link_class(link.route == current),
                            NavIconView { icon: link.icon }
                            "{link.label}"
                        }
                    }
                }
            }
        }
    )
}
