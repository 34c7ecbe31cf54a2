use shared::models::Order;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OrderTableProps {
    pub orders: Vec<Order>,
    #[prop_or_default]
    pub on_select: Option<Callback<String>>,
}

fn status_badge(status: &str) -> &'static str {
    match status {
        "Confirmed" => "badge badge-success",
        "Cancelled" => "badge badge-error",
        _ => "badge badge-warning",
    }
}

#[function_component(OrderTable)]
pub fn order_table(props: &OrderTableProps) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Order"}</th>
                        <th>{"Payment"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Address"}</th>
                        <th>{"Date"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.orders.iter().map(|order| {
                        let on_select = props.on_select.clone();
                        let id = order.id.clone();
                        let onclick = Callback::from(move |_| {
                            if let Some(callback) = &on_select {
                                callback.emit(id.clone());
                            }
                        });
                        html! {
                            <tr class="hover cursor-pointer" {onclick}>
                                <td>{ format!("#{}", order.id) }</td>
                                <td>{ &order.payment_status }</td>
                                <td>{ &order.amount }</td>
                                <td>{ &order.address }</td>
                                <td>{ &order.date }</td>
                                <td><span class={status_badge(&order.status)}>{ &order.status }</span></td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
