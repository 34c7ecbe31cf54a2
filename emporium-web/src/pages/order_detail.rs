use yew::prelude::*;
use yew_router::prelude::Link;

use crate::pages::demo_orders;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct OrderDetailProps {
    pub id: String,
}

/// Looks the order up in the same demo data the list page renders, so
/// following a row always resolves.
#[function_component(OrderDetailPage)]
pub fn order_detail_page(props: &OrderDetailProps) -> Html {
    let order = demo_orders()
        .into_iter()
        .find(|order| order.id == props.id);

    let Some(order) = order else {
        return html! {
            <div class="mx-auto max-w-4xl p-6">
                <Link<MainRoute> to={MainRoute::MyOrders} classes="link">
                    {"Back to My Orders"}
                </Link<MainRoute>>
                <div class="alert alert-warning mt-4">
                    <span>{ format!("Order #{} was not found.", props.id) }</span>
                </div>
            </div>
        };
    };

    // Line items are demo data until the orders backend exists.
    let items = [("Headphones", 1, "$100"), ("Keyboard", 2, "$150")];

    html! {
        <div class="mx-auto max-w-4xl p-6">
            <Link<MainRoute> to={MainRoute::MyOrders} classes="link">
                {"Back to My Orders"}
            </Link<MainRoute>>
            <h1 class="text-2xl font-semibold mt-4 mb-6">{ format!("Order #{}", order.id) }</h1>
            <div class="bg-base-100 shadow rounded-lg p-6">
                <div class="grid grid-cols-2 gap-4 text-sm">
                    <div><strong>{"Customer: "}</strong>{ &order.customer_name }</div>
                    <div><strong>{"Status: "}</strong>{ &order.status }</div>
                    <div><strong>{"Address: "}</strong>{ &order.address }</div>
                    <div><strong>{"Total: "}</strong>{ &order.amount }</div>
                </div>
                <h2 class="text-lg font-medium mt-6 mb-3">{"Products"}</h2>
                <ul class="divide-y divide-base-300">
                    { for items.iter().map(|(name, qty, price)| html! {
                        <li class="py-2 flex justify-between">
                            <span>{ format!("{name} × {qty}") }</span>
                            <span>{ *price }</span>
                        </li>
                    }) }
                </ul>
            </div>
        </div>
    }
}
