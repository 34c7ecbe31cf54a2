use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::favorites::Favorites;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub id: String,
    pub title: String,
    pub price: f64,
    #[prop_or_default]
    pub image: String,
    #[prop_or_default]
    pub rating: Option<f64>,
}

/// Catalog card with a favorite toggle; the toggle mutates the
/// favorites store, which persists synchronously.
#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let (favorites, dispatch) = use_store::<Favorites>();
    let is_favorite = favorites.is_favorite(&props.id);

    let on_toggle = {
        let id = props.id.clone();
        dispatch.reduce_mut_callback_with(move |favorites, event: MouseEvent| {
            event.prevent_default();
            favorites.toggle(&id);
        })
    };

    let heart = if is_favorite {
        IconId::HeroiconsSolidHeart
    } else {
        IconId::HeroiconsOutlineHeart
    };

    html! {
        <div class="card bg-base-100 shadow-sm">
            <Link<MainRoute> to={MainRoute::Product { id: props.id.clone() }}>
                <figure class="aspect-square bg-base-200">
                    <img src={props.image.clone()} alt={props.title.clone()} loading="lazy" />
                </figure>
            </Link<MainRoute>>
            <div class="card-body p-4">
                <div class="flex items-start justify-between gap-2">
                    <h3 class="card-title text-sm">{ &props.title }</h3>
                    <button
                        class="btn btn-ghost btn-circle btn-sm"
                        aria-label={ if is_favorite { "Remove from favorites" } else { "Add to favorites" } }
                        onclick={on_toggle}
                    >
                        <Icon icon_id={heart} width="18" height="18" />
                    </button>
                </div>
                <div class="flex items-center justify-between">
                    <span class="font-semibold">{ format!("${:.2}", props.price) }</span>
                    if let Some(rate) = props.rating {
                        <span class="text-xs text-base-content/70">
                            { format!("★ {rate:.1}") }
                        </span>
                    }
                </div>
            </div>
        </div>
    }
}
