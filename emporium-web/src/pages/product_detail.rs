use shared::models::ProductDetail;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_is_mounted;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

use crate::api::EmporiumClient;
use crate::components::Loading;
use crate::favorites::Favorites;

#[derive(Properties, PartialEq)]
pub struct ProductDetailProps {
    pub id: String,
}

fn stock_label(detail: &ProductDetail) -> (&'static str, &'static str) {
    if detail.is_out_of_stock {
        ("Out of stock", "text-error")
    } else if detail.is_low_stock {
        ("Low stock", "text-warning")
    } else {
        ("In stock", "text-success")
    }
}

#[function_component(ProductDetailPage)]
pub fn product_detail_page(props: &ProductDetailProps) -> Html {
    let detail = use_state(|| None::<Result<ProductDetail, String>>);
    let is_mounted = use_is_mounted();
    let (favorites, dispatch) = use_store::<Favorites>();

    {
        let detail = detail.clone();
        let is_mounted = is_mounted;
        use_effect_with(props.id.clone(), move |id| {
            detail.set(None);
            let id = id.clone();
            let detail = detail.clone();
            spawn_local(async move {
                let client = EmporiumClient::shared();
                let fetched = client.product(&id).await.map_err(|err| err.to_string());
                if is_mounted() {
                    detail.set(Some(fetched));
                }
            });
        });
    }

    match &*detail {
        None => html! { <Loading /> },
        Some(Err(message)) => html! {
            <div class="p-6">
                <div class="alert alert-error"><span>{message.clone()}</span></div>
                <p class="text-sm text-base-content/70 mt-2">{"Try reloading the page."}</p>
            </div>
        },
        Some(Ok(product)) => {
            let is_favorite = favorites.is_favorite(&product.id);
            let heart = if is_favorite {
                IconId::HeroiconsSolidHeart
            } else {
                IconId::HeroiconsOutlineHeart
            };
            let on_toggle = {
                let id = product.id.clone();
                dispatch.reduce_mut_callback_with(move |favorites, _: MouseEvent| {
                    favorites.toggle(&id);
                })
            };
            let (stock_text, stock_class) = stock_label(product);
            html! {
                <main class="p-6 mx-auto max-w-6xl">
                    <div class="grid gap-10 md:grid-cols-2">
                        <figure class="aspect-[4/3] rounded-xl overflow-hidden bg-base-200">
                            if product.image.is_empty() {
                                <div class="grid place-items-center h-full text-base-content/60">
                                    {"No image"}
                                </div>
                            } else {
                                <img
                                    src={product.image.clone()}
                                    alt={product.title.clone()}
                                    class="h-full w-full object-cover"
                                    loading="lazy"
                                />
                            }
                        </figure>
                        <div>
                            <h1 class="text-2xl font-semibold">{ &product.title }</h1>
                            <p class="mt-2 text-lg font-medium">{ format!("${:.2}", product.price) }</p>
                            <p class="mt-4 text-sm leading-relaxed text-base-content/80 max-w-prose">
                                {
                                    if product.description.is_empty() {
                                        "No description available."
                                    } else {
                                        product.description.as_str()
                                    }
                                }
                            </p>
                            <div class="mt-4 flex items-center gap-2 text-sm">
                                <span class="font-medium">{"Rating:"}</span>
                                <span>{ format!("{:.1} / 5", product.rating.rate) }</span>
                                <span class="text-base-content/60">
                                    { format!("({} reviews)", product.rating.count) }
                                </span>
                            </div>
                            <div class="mt-2 text-sm">
                                <span class={classes!("font-medium", stock_class)}>{ stock_text }</span>
                                {" "}
                                <span class="text-base-content/60">
                                    { format!("({}/{} available)", product.inventory_available, product.inventory_total) }
                                </span>
                            </div>
                            <div class="mt-6 flex items-center gap-4">
                                <button class="btn btn-primary" disabled={product.is_out_of_stock}>
                                    {"Add to cart"}
                                </button>
                                <button
                                    class="btn btn-ghost"
                                    aria-label={ if is_favorite { "Remove from favorites" } else { "Add to favorites" } }
                                    onclick={on_toggle}
                                >
                                    <Icon icon_id={heart} width="18" height="18" />
                                    {"Favorite"}
                                </button>
                            </div>
                        </div>
                    </div>
                </main>
            }
        }
    }
}
