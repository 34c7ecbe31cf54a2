use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();
    let Some(current) = state.session.clone() else {
        return html! {};
    };

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                session::logout().await;
                dispatch.set(AppState { session: None });
                if let Some(navigator) = navigator {
                    navigator.push(&MainRoute::Home);
                }
            });
        });
        html! {
            <li><a {onclick}>{"Sign out"}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                {
                    current.user.avatar_url.as_ref().map_or_else(
                        || html! { <Icon icon_id={IconId::HeroiconsOutlineUser} width="20" height="20" /> },
                        |url| html! { <img class="rounded-full w-8 h-8" src={url.clone()} alt="avatar" /> },
                    )
                }
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ &current.user.name }</div>
                    if let Some(email) = &current.user.email {
                        <div class="text-xs text-base-content/70">{ email }</div>
                    }
                </li>
                <div class="divider my-0"></div>
                <li>
                    <Link<MainRoute> to={MainRoute::Favorites}>
                        {"Favorites"}
                    </Link<MainRoute>>
                </li>
                <li>
                    <Link<MainRoute> to={MainRoute::MyOrders}>
                        {"My Orders"}
                    </Link<MainRoute>>
                </li>
                if current.user.role.is_back_office() {
                    <li>
                        <Link<MainRoute> to={MainRoute::EmployeePortal}>
                            {"Employee Portal"}
                        </Link<MainRoute>>
                    </li>
                }
                <div class="divider my-0"></div>
                { logout_button }
            </ul>
        </div>
    }
}
