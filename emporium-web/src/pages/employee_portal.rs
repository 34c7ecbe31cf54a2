use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// Landing page for back-office roles: one tile per create form.
#[function_component(EmployeePortalPage)]
pub fn employee_portal_page() -> Html {
    html! {
        <div class="mx-auto max-w-4xl p-6">
            <h1 class="text-3xl font-bold text-center mb-10">{"Employee Portal"}</h1>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                { for MainRoute::iter().filter(MainRoute::is_create_form).map(|route| html! {
                    <Link<MainRoute> to={route.clone()} classes="card bg-base-100 shadow hover:shadow-md transition-shadow">
                        <div class="card-body items-center text-center">
                            <h2 class="card-title">{ route.label() }</h2>
                        </div>
                    </Link<MainRoute>>
                }) }
            </div>
        </div>
    }
}
