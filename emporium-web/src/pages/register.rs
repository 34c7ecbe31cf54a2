use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let email = use_state(String::new);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let remember = use_state(|| true);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    let mismatch = !(*confirm).is_empty() && *confirm != *password;

    let onsubmit = {
        let email_handle = email.clone();
        let username_handle = username.clone();
        let password_handle = password.clone();
        let confirm_handle = confirm.clone();
        let remember_handle = remember.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *confirm_handle != *password_handle {
                error_handle.set(Some("Passwords do not match".to_string()));
                return;
            }
            let email_value = (*email_handle).clone();
            let username_value = (*username_handle).clone();
            let password_value = (*password_handle).clone();
            let remember_value = *remember_handle;
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match session::register(email_value, username_value, password_value, remember_value)
                    .await
                {
                    Ok((session, suggested)) => {
                        dispatch.set(AppState {
                            session: Some(session),
                        });
                        let target = suggested.unwrap_or(MainRoute::Home);
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

    let text_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
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
    let disable_submit = (*email).is_empty()
        || (*username).is_empty()
        || (*password).is_empty()
        || (*confirm).is_empty()
        || mismatch
        || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create account"}</h2>
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
                            oninput={text_input(&email)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*username).clone()}
                            oninput={text_input(&username)}
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
                            oninput={text_input(&password)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="confirm">
                            <span class="label-text">{"Confirm password"}</span>
                        </label>
                        <input
                            id="confirm"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*confirm).clone()}
                            oninput={text_input(&confirm)}
                        />
                        if mismatch {
                            <span class="label-text-alt text-error mt-1">
                                {"Passwords do not match"}
                            </span>
                        }
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
                            {if is_busy { "Creating account..." } else { "Sign up" }}
                        </button>
                    </div>
                    <div class="text-center text-sm mt-2">
                        {"Already have an account? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link">
                            {"Sign in"}
                        </Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}
