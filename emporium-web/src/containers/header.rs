use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::components::user_dropdown::UserDropdown;
use crate::favorites::Favorites;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Global navigation bar shared by every page.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let state = use_selector(|state: &AppState| state.clone());
    let favorite_count = use_selector(Favorites::count);
    let is_authenticated = state.is_authenticated();
    let back_office = state.role().is_some_and(shared::models::Role::is_back_office);

    let on_search = Callback::from(|event: KeyboardEvent| {
        if event.key() == "Enter" {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                // Search is not wired to the backend yet.
                log::debug!("search: {}", input.value());
            }
        }
    });

    let nav_link = |route: MainRoute| {
        let active = props.current_route.as_ref() == Some(&route);
        let classes = if active { "btn btn-ghost btn-sm btn-active" } else { "btn btn-ghost btn-sm" };
        html! {
            <Link<MainRoute> to={route.clone()} classes={classes}>
                { route.label() }
            </Link<MainRoute>>
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                {"TechTrend Emporium"}
            </Link<MainRoute>>
            <div class="form-control hidden sm:block">
                <input
                    class="input input-bordered input-sm w-64"
                    type="search"
                    placeholder="Search products"
                    onkeypress={on_search}
                />
            </div>
            <ul class="menu menu-horizontal items-center gap-1">
                { nav_link(MainRoute::Home) }
                if is_authenticated {
                    { nav_link(MainRoute::MyOrders) }
                }
                if back_office {
                    { nav_link(MainRoute::EmployeePortal) }
                }
                <li>
                    <Link<MainRoute> to={MainRoute::Favorites} classes="btn btn-ghost btn-sm indicator">
                        <Icon icon_id={IconId::HeroiconsOutlineHeart} width="18" height="18" />
                        if *favorite_count > 0 {
                            <span class="badge badge-sm badge-primary indicator-item">
                                { *favorite_count }
                            </span>
                        }
                    </Link<MainRoute>>
                </li>
            </ul>
            <div class="flex items-center gap-2">
                {
                    if is_authenticated {
                        html! { <UserDropdown /> }
                    } else {
                        html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {"Sign in"}
                            </Link<MainRoute>>
                        }
                    }
                }
            </div>
        </nav>
    }
}
