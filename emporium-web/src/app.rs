use yew::{Html, function_component, html};
use yew_router::prelude::*;

use crate::routes::{MainRoute, switch};

/// Root component: the session is restored synchronously when the
/// state store is first read, so routing can start immediately without
/// a flash of the unauthenticated shell.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
