use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::{use_location, use_navigator};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let remember = use_state(|| true);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let location = use_location();
    let (_state, dispatch) = use_store::<AppState>();

    // Route the guard was bounced from, carried as history state.
    let origin = location
        .as_ref()
        .and_then(|location| location.state::<MainRoute>())
        .map(|route| (*route).clone());

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let remember_handle = remember.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        let origin = origin;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            let remember_value = *remember_handle;
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let origin = origin.clone();
            spawn_local(async move {
                match session::login(email_value, password_value, remember_value).await {
                    Ok((session, suggested)) => {
                        dispatch.set(AppState {
                            session: Some(session),
                        });
                        // Role suggestion wins; otherwise return to
                        // wherever the guard bounced us from, or home.
                        let target = suggested.or(origin).unwrap_or(MainRoute::Home);
                        // Navigation unmounts this page; no state
                        // writes after it.
                        if let Some(navigator) = &navigator {
                            navigator.push(&target);
                        }
                    }
                    Err(message) => {
                        error_ref.set(Some(message));
                        loading_ref.set(false);
                    }
                }
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_remember_change = {
        let remember = remember.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                remember.set(input.checked());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label cursor-pointer justify-start gap-2">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-sm"
                                checked={*remember}
                                onchange={on_remember_change}
                            />
                            <span class="label-text">{"Remember me"}</span>
                        </label>
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                    <div class="flex justify-between text-sm mt-2">
                        <Link<MainRoute> to={MainRoute::ForgotPassword} classes="link">
                            {"Forgot password?"}
                        </Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Register} classes="link">
                            {"Create account"}
                        </Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}
