use shared::models::ProductDetail;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::api::EmporiumClient;
use crate::components::{Loading, ProductCard};
use crate::favorites::Favorites;
use crate::routes::MainRoute;

/// Favorites are stored as bare product ids; the page resolves them
/// against the approved catalog and keeps an id-only card for anything
/// the catalog no longer returns.
#[function_component(FavoritesPage)]
pub fn favorites_page() -> Html {
    let (favorites, dispatch) = use_store::<Favorites>();
    let catalog = use_state(|| None::<Result<Vec<ProductDetail>, String>>);
    let is_mounted = use_is_mounted();

    {
        let catalog = catalog.clone();
        let is_mounted = is_mounted;
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = EmporiumClient::shared();
                let fetched = client
                    .approved_products()
                    .await
                    .map_err(|err| err.to_string());
                if is_mounted() {
                    catalog.set(Some(fetched));
                }
            });
        });
    }

    let on_clear = dispatch.reduce_mut_callback_with(|favorites, _: MouseEvent| {
        favorites.clear();
    });

    if favorites.is_empty() {
        return html! {
            <div class="mx-auto max-w-6xl p-6">
                <h1 class="text-2xl font-semibold mb-6">{"Favorites"}</h1>
                <div class="rounded-xl border border-base-300 p-10 text-center bg-base-100">
                    <p class="text-lg font-medium">{"Your favorites list is empty."}</p>
                    <p class="text-base-content/70 mt-1">
                        {"Browse products and tap the heart to add them here."}
                    </p>
                    <Link<MainRoute> to={MainRoute::Home} classes="btn btn-outline mt-6">
                        {"Go to Home"}
                    </Link<MainRoute>>
                </div>
            </div>
        };
    }

    let cards = match &*catalog {
        None => html! { <Loading /> },
        Some(Err(message)) => html! {
            <div class="alert alert-warning"><span>{message.clone()}</span></div>
        },
        Some(Ok(products)) => html! {
            <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-3">
                { for favorites.ids().iter().map(|id| {
                    products
                        .iter()
                        .find(|product| product.id == *id)
                        .map_or_else(
                            || html! {
                                <ProductCard
                                    id={id.clone()}
                                    title={format!("Product {id}")}
                                    price={0.0}
                                />
                            },
                            |product| html! {
                                <ProductCard
                                    id={product.id.clone()}
                                    title={product.title.clone()}
                                    price={product.price}
                                    image={product.image.clone()}
                                    rating={Some(product.rating.rate)}
                                />
                            },
                        )
                }) }
            </div>
        },
    };

    html! {
        <div class="mx-auto max-w-6xl p-6">
            <div class="mb-6 flex items-center justify-between">
                <h1 class="text-2xl font-semibold">{"Favorites"}</h1>
                <button class="link text-sm" onclick={on_clear}>{"Clear all"}</button>
            </div>
            { cards }
        </div>
    }
}
