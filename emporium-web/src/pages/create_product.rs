use shared::models::{Category, CreatedBy, ModerationStatus, ProductDraft, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::api::EmporiumClient;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

/// Raw form fields as typed by the user.
#[derive(Debug, Default, Clone, PartialEq)]
struct ProductForm {
    title: String,
    price: String,
    category_id: String,
    description: String,
    image: String,
    inventory: String,
}

/// Validated, parsed fields ready to become a draft.
#[derive(Debug, Clone, PartialEq)]
struct ValidatedProduct {
    title: String,
    price: f64,
    category_id: String,
    description: String,
    image: String,
    inventory: u32,
}

/// Validate the raw form against the loaded category list. Returns the
/// first failure as a display-ready message.
fn validate(form: &ProductForm, categories: &[Category]) -> Result<ValidatedProduct, String> {
    let title = form.title.trim();
    if title.chars().count() < 2 {
        return Err("Title is required".to_string());
    }
    let price: f64 = form
        .price
        .trim()
        .parse()
        .map_err(|_| "Price must be a number".to_string())?;
    if price <= 0.0 {
        return Err("Price must be greater than 0".to_string());
    }
    if form.category_id.is_empty() {
        return Err("Category is required".to_string());
    }
    if !categories
        .iter()
        .any(|category| category.id == form.category_id)
    {
        return Err("Selected category does not exist.".to_string());
    }
    let description = form.description.trim();
    if description.chars().count() < 5 {
        return Err("Description is required".to_string());
    }
    let image = form.image.trim();
    if !(image.starts_with("http://") || image.starts_with("https://")) {
        return Err("Image must be a valid URL".to_string());
    }
    let inventory: u32 = form
        .inventory
        .trim()
        .parse()
        .map_err(|_| "Inventory must be 0 or more".to_string())?;
    Ok(ValidatedProduct {
        title: title.to_string(),
        price,
        category_id: form.category_id.clone(),
        description: description.to_string(),
        image: image.to_string(),
        inventory,
    })
}

fn build_draft(validated: ValidatedProduct, user_id: &str, role: Role) -> ProductDraft {
    ProductDraft {
        title: validated.title,
        price: validated.price,
        category_id: Some(validated.category_id),
        category: None,
        description: validated.description,
        image: validated.image,
        inventory: validated.inventory,
        status: ModerationStatus::for_role(role),
        created_by: Some(CreatedBy {
            id: user_id.to_string(),
            role,
        }),
    }
}

fn success_message(status: ModerationStatus) -> &'static str {
    match status {
        ModerationStatus::Approved => "Product created and approved.",
        ModerationStatus::Unapproved => "Product created and sent for approval.",
    }
}

#[function_component(CreateProductPage)]
pub fn create_product_page() -> Html {
    let form = use_state(ProductForm::default);
    let categories = use_state(Vec::<Category>::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let is_mounted = use_is_mounted();
    let (state, _dispatch) = use_store::<AppState>();

    {
        let categories = categories.clone();
        let error = error.clone();
        let is_mounted = is_mounted;
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = EmporiumClient::shared();
                match client.categories().await {
                    Ok(list) if is_mounted() => categories.set(list),
                    Err(err) if is_mounted() => {
                        error.set(Some(format!("Could not load categories: {err}")));
                    }
                    _ => {}
                }
            });
        });
    }

    let onsubmit = {
        let form_handle = form.clone();
        let categories_handle = categories.clone();
        let error_handle = error.clone();
        let success_handle = success.clone();
        let saving_handle = saving.clone();
        let session = state.session.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            error_handle.set(None);
            success_handle.set(None);

            let validated = match validate(&form_handle, &categories_handle) {
                Ok(validated) => validated,
                Err(message) => {
                    error_handle.set(Some(message));
                    return;
                }
            };
            let Some(session) = session.clone() else {
                error_handle.set(Some("You must be signed in.".to_string()));
                return;
            };

            saving_handle.set(true);
            let form_ref = form_handle.clone();
            let error_ref = error_handle.clone();
            let success_ref = success_handle.clone();
            let saving_ref = saving_handle.clone();
            spawn_local(async move {
                let client = EmporiumClient::shared();
                if client
                    .product_exists(&validated.title, Some(&validated.category_id))
                    .await
                {
                    error_ref.set(Some(
                        "A product with this title already exists in the selected category."
                            .to_string(),
                    ));
                    saving_ref.set(false);
                    return;
                }

                let draft = build_draft(validated, &session.user.id, session.user.role);
                let status = draft.status;
                match client.create_product(&draft).await {
                    Ok(_) => {
                        success_ref.set(Some(success_message(status).to_string()));
                        form_ref.set(ProductForm::default());
                    }
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                saving_ref.set(false);
            });
        })
    };

    let text_field = |write: fn(&mut ProductForm, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut updated = (*form).clone();
                write(&mut updated, input.value());
                form.set(updated);
            }
        })
    };

    let on_description_change = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut updated = (*form).clone();
                updated.description = area.value();
                form.set(updated);
            }
        })
    };

    let on_category_change = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut updated = (*form).clone();
                updated.category_id = select.value();
                form.set(updated);
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
                <h2 class="text-xl font-semibold mb-4">{"Create Product"}</h2>
                <form onsubmit={onsubmit} novalidate=true>
                    <div class="form-control">
                        <label class="label" for="title">
                            <span class="label-text">{"Title"}</span>
                        </label>
                        <input
                            id="title"
                            class="input input-bordered"
                            type="text"
                            value={form.title.clone()}
                            oninput={text_field(|form, value| form.title = value)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="price">
                            <span class="label-text">{"Price"}</span>
                        </label>
                        <input
                            id="price"
                            class="input input-bordered"
                            type="number"
                            step="0.01"
                            value={form.price.clone()}
                            oninput={text_field(|form, value| form.price = value)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="category">
                            <span class="label-text">{"Category"}</span>
                        </label>
                        <select
                            id="category"
                            class="select select-bordered"
                            onchange={on_category_change}
                        >
                            <option value="" selected={form.category_id.is_empty()} disabled=true>
                                {"Select a category"}
                            </option>
                            { for categories.iter().map(|category| html! {
                                <option
                                    value={category.id.clone()}
                                    selected={form.category_id == category.id}
                                >
                                    { &category.name }
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label" for="description">
                            <span class="label-text">{"Description"}</span>
                        </label>
                        <textarea
                            id="description"
                            class="textarea textarea-bordered"
                            rows="3"
                            value={form.description.clone()}
                            oninput={on_description_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="image">
                            <span class="label-text">{"Image"}</span>
                        </label>
                        <input
                            id="image"
                            class="input input-bordered"
                            type="url"
                            value={form.image.clone()}
                            oninput={text_field(|form, value| form.image = value)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="inventory">
                            <span class="label-text">{"Inventory"}</span>
                        </label>
                        <input
                            id="inventory"
                            class="input input-bordered"
                            type="number"
                            min="0"
                            value={form.inventory.clone()}
                            oninput={text_field(|form, value| form.inventory = value)}
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

    fn category(id: &str, name: &str) -> Category {
        serde_json::from_str(&format!(r#"{{"id":"{id}","name":"{name}"}}"#)).unwrap()
    }

    fn valid_form() -> ProductForm {
        ProductForm {
            title: "  Desk Lamp ".into(),
            price: "29.99".into(),
            category_id: "c1".into(),
            description: "  Warm light for late nights. ".into(),
            image: "https://img.example/lamp.png".into(),
            inventory: "12".into(),
        }
    }

    fn catalog() -> Vec<Category> {
        vec![category("c1", "Lighting"), category("c2", "Furniture")]
    }

    #[test]
    fn valid_form_parses_and_trims() {
        let validated = validate(&valid_form(), &catalog()).unwrap();
        assert_eq!(validated.title, "Desk Lamp");
        assert_eq!(validated.description, "Warm light for late nights.");
        assert!((validated.price - 29.99).abs() < f64::EPSILON);
        assert_eq!(validated.inventory, 12);
    }

    #[test]
    fn short_title_is_rejected() {
        let mut form = valid_form();
        form.title = " x ".into();
        assert_eq!(
            validate(&form, &catalog()).unwrap_err(),
            "Title is required"
        );
    }

    #[test]
    fn price_must_be_positive_number() {
        let mut form = valid_form();
        form.price = "0".into();
        assert_eq!(
            validate(&form, &catalog()).unwrap_err(),
            "Price must be greater than 0"
        );
        form.price = "free".into();
        assert_eq!(
            validate(&form, &catalog()).unwrap_err(),
            "Price must be a number"
        );
    }

    #[test]
    fn category_must_be_selected_and_known() {
        let mut form = valid_form();
        form.category_id = String::new();
        assert_eq!(
            validate(&form, &catalog()).unwrap_err(),
            "Category is required"
        );
        form.category_id = "c9".into();
        assert_eq!(
            validate(&form, &catalog()).unwrap_err(),
            "Selected category does not exist."
        );
    }

    #[test]
    fn description_and_image_are_checked() {
        let mut form = valid_form();
        form.description = " ok ".into();
        assert_eq!(
            validate(&form, &catalog()).unwrap_err(),
            "Description is required"
        );
        let mut form = valid_form();
        form.image = "not-a-url".into();
        assert_eq!(
            validate(&form, &catalog()).unwrap_err(),
            "Image must be a valid URL"
        );
    }

    #[test]
    fn inventory_must_be_nonnegative_integer() {
        let mut form = valid_form();
        form.inventory = "-1".into();
        assert_eq!(
            validate(&form, &catalog()).unwrap_err(),
            "Inventory must be 0 or more"
        );
        form.inventory = "2.5".into();
        assert!(validate(&form, &catalog()).is_err());
    }

    #[test]
    fn draft_status_follows_role() {
        let validated = validate(&valid_form(), &catalog()).unwrap();
        let admin = build_draft(validated.clone(), "u1", Role::Admin);
        assert_eq!(admin.status, ModerationStatus::Approved);
        assert_eq!(admin.category_id.as_deref(), Some("c1"));
        let employee = build_draft(validated, "u2", Role::Employee);
        assert_eq!(employee.status, ModerationStatus::Unapproved);
        assert_eq!(
            employee.created_by,
            Some(CreatedBy {
                id: "u2".into(),
                role: Role::Employee
            })
        );
    }
}
