use shared::models::{Category, Product, SortBy, SortDir};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_is_mounted;

use crate::api::EmporiumClient;
use crate::components::{Loading, ProductCard};

const LATEST_RAIL_SIZE: u32 = 6;
const BEST_RAIL_SIZE: u32 = 3;

fn product_rail(title: &str, products: &[Product]) -> Html {
    html! {
        <section class="mb-10">
            <h2 class="text-xl font-semibold mb-4">{ title }</h2>
            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4">
                { for products.iter().map(|product| html! {
                    <ProductCard
                        id={product.id.clone()}
                        title={product.title.clone()}
                        price={product.price}
                        image={product.image.clone()}
                        rating={Some(product.rating.rate)}
                    />
                }) }
            </div>
        </section>
    }
}

/// Landing page: category chips plus two product rails fetched from
/// the catalog.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let categories = use_state(|| None::<Result<Vec<Category>, String>>);
    let latest = use_state(|| None::<Result<Vec<Product>, String>>);
    let best = use_state(|| None::<Result<Vec<Product>, String>>);
    let is_mounted = use_is_mounted();

    {
        let categories = categories.clone();
        let latest = latest.clone();
        let best = best.clone();
        let is_mounted = is_mounted;
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = EmporiumClient::shared();
                let fetched_categories =
                    client.categories().await.map_err(|err| err.to_string());
                let fetched_latest = client
                    .products(1, LATEST_RAIL_SIZE, None)
                    .await
                    .map(|paged| paged.items)
                    .map_err(|err| err.to_string());
                let fetched_best = client
                    .products(1, BEST_RAIL_SIZE, Some((SortBy::Rating, SortDir::Desc)))
                    .await
                    .map(|paged| paged.items)
                    .map_err(|err| err.to_string());
                if is_mounted() {
                    categories.set(Some(fetched_categories));
                    latest.set(Some(fetched_latest));
                    best.set(Some(fetched_best));
                }
            });
        });
    }

    let category_chips = match &*categories {
        None => html! { <Loading /> },
        Some(Err(message)) => html! {
            <div class="alert alert-warning"><span>{message.clone()}</span></div>
        },
        Some(Ok(list)) => html! {
            <div class="flex flex-wrap gap-2">
                { for list.iter().map(|category| html! {
                    <span class="badge badge-outline badge-lg">{ &category.name }</span>
                }) }
            </div>
        },
    };

    let rail = |title: &str, state: &Option<Result<Vec<Product>, String>>| match state {
        None => html! { <Loading /> },
        Some(Err(message)) => html! {
            <div class="alert alert-warning"><span>{message.clone()}</span></div>
        },
        Some(Ok(products)) => product_rail(title, products),
    };

    html! {
        <div class="mx-auto max-w-6xl p-6">
            <div class="hero bg-base-200 rounded-xl mb-10">
                <div class="hero-content text-center py-12">
                    <div>
                        <h1 class="text-4xl font-bold">{"TechTrend Emporium"}</h1>
                        <p class="py-4 text-base-content/70">
                            {"Discover the latest gear and community picks."}
                        </p>
                    </div>
                </div>
            </div>
            <section class="mb-10">
                <h2 class="text-xl font-semibold mb-4">{"Shop by category"}</h2>
                { category_chips }
            </section>
            { rail("Latest products", &latest) }
            { rail("Best sellers", &best) }
        </div>
    }
}
