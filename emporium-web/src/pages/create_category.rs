use shared::models::{CategoryDraft, CreatedBy, ModerationStatus};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::api::EmporiumClient;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

/// Trimmed category name, or a display-ready validation error.
fn validate_name(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < 2 {
        Err("Name is required".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

fn success_message(status: ModerationStatus) -> &'static str {
    match status {
        ModerationStatus::Approved => "Category created and approved.",
        ModerationStatus::Unapproved => "Category created and sent for approval.",
    }
}

#[function_component(CreateCategoryPage)]
pub fn create_category_page() -> Html {
    let name = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let (state, _dispatch) = use_store::<AppState>();

    let onsubmit = {
        let name_handle = name.clone();
        let error_handle = error.clone();
        let success_handle = success.clone();
        let saving_handle = saving.clone();
        let session = state.session.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            error_handle.set(None);
            success_handle.set(None);

            let trimmed = match validate_name(&name_handle) {
                Ok(trimmed) => trimmed,
                Err(message) => {
                    error_handle.set(Some(message));
                    return;
                }
            };
            // The route guard admits only back-office roles, so a
            // missing session here is a bug rather than a user error.
            let Some(session) = session.clone() else {
                error_handle.set(Some("You must be signed in.".to_string()));
                return;
            };

            saving_handle.set(true);
            let name_ref = name_handle.clone();
            let error_ref = error_handle.clone();
            let success_ref = success_handle.clone();
            let saving_ref = saving_handle.clone();
            spawn_local(async move {
                let client = EmporiumClient::shared();
                if client.category_exists(&trimmed).await {
                    error_ref.set(Some("A category with this name already exists.".to_string()));
                    saving_ref.set(false);
                    return;
                }

                let status = ModerationStatus::for_role(session.user.role);
                let draft = CategoryDraft {
                    name: trimmed,
                    status,
                    created_by: Some(CreatedBy {
                        id: session.user.id.clone(),
                        role: session.user.role,
                    }),
                };
                match client.create_category(&draft).await {
                    Ok(_) => {
                        success_ref.set(Some(success_message(status).to_string()));
                        name_ref.set(String::new());
                    }
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                saving_ref.set(false);
            });
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let is_saving = *saving;

    html! {
        <div class="min-h-screen bg-base-200 p-6 md:p-10">
            <Link<MainRoute> to={MainRoute::EmployeePortal} classes="link text-sm">
                {"< Back"}
            </Link<MainRoute>>
            <h1 class="text-3xl md:text-5xl font-bold text-center mb-10">{"Employee Portal"}</h1>
            <div class="max-w-lg mx-auto bg-base-100 rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">{"Create Category"}</h2>
                <form onsubmit={onsubmit} novalidate=true>
                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            id="name"
                            class="input input-bordered"
                            type="text"
                            value={(*name).clone()}
                            oninput={on_name_change}
                        />
                    </div>
                    if let Some(message) = &*error {
                        <div class="text-error mt-2">{message.clone()}</div>
                    }
                    if let Some(message) = &*success {
                        <div class="text-success mt-2">{message.clone()}</div>
                    }
                    <button class="btn btn-primary mt-4 w-full" type="submit" disabled={is_saving}>
                        {if is_saving { "Saving..." } else { "Add" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    #[test]
    fn name_is_trimmed_and_length_checked() {
        assert_eq!(validate_name("  Toys  "), Ok("Toys".to_string()));
        assert!(validate_name("x").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("  a ").is_err());
    }

    #[test]
    fn success_message_tracks_moderation() {
        assert_eq!(
            success_message(ModerationStatus::for_role(Role::Admin)),
            "Category created and approved."
        );
        assert_eq!(
            success_message(ModerationStatus::for_role(Role::Employee)),
            "Category created and sent for approval."
        );
    }
}
