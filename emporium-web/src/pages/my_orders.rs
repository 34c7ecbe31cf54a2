use shared::models::Order;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::components::OrderTable;
use crate::routes::MainRoute;

/// Static demo orders shown while the orders backend is not wired up.
#[must_use]
pub fn demo_orders() -> Vec<Order> {
    let rows = [
        ("300", "Paid", "$400", "Los Angeles", "9-Jan-2022", "Confirmed"),
        ("301", "Paid", "$400", "Los Angeles", "9-Jan-2022", "Cancelled"),
        ("302", "Paid", "$180", "San Diego", "12-Feb-2022", "Confirmed"),
        ("303", "Pending", "$250", "San Jose", "20-Mar-2022", "In Process"),
        ("304", "Paid", "$99", "Los Angeles", "2-Apr-2022", "Confirmed"),
        ("305", "Refunded", "$65", "Pasadena", "15-Apr-2022", "Cancelled"),
    ];
    rows.into_iter()
        .map(
            |(id, payment_status, amount, address, date, status)| Order {
                id: id.to_string(),
                customer_name: "John".to_string(),
                payment_status: payment_status.to_string(),
                amount: amount.to_string(),
                address: address.to_string(),
                date: date.to_string(),
                status: status.to_string(),
            },
        )
        .collect()
}

#[function_component(MyOrdersPage)]
pub fn my_orders_page() -> Html {
    let navigator = use_navigator();

    let on_select = Callback::from(move |id: String| {
        if let Some(navigator) = &navigator {
            navigator.push(&MainRoute::Order { id });
        }
    });

    html! {
        <div class="mx-auto max-w-6xl p-6">
            <div class="mb-6 flex items-center justify-between">
                <h1 class="text-2xl font-semibold">{"My Orders"}</h1>
                <select class="select select-bordered select-sm">
                    <option>{"Last 7 Days"}</option>
                    <option>{"Last Month"}</option>
                    <option>{"Last Year"}</option>
                </select>
            </div>
            <OrderTable orders={demo_orders()} on_select={on_select} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_orders_have_unique_ids() {
        let orders = demo_orders();
        assert_eq!(orders.len(), 6);
        let mut ids: Vec<_> = orders.iter().map(|order| order.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn demo_orders_cover_each_status() {
        let orders = demo_orders();
        for status in ["Confirmed", "Cancelled", "In Process"] {
            assert!(orders.iter().any(|order| order.status == status));
        }
    }
}
