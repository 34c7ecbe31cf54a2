use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use shared::models::Role;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The storefront routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/product/:id")]
    Product { id: String },
    #[at("/favorites")]
    Favorites,
    #[at("/my-orders")]
    MyOrders,
    #[at("/my-orders/:id")]
    Order { id: String },
    #[at("/employee-portal")]
    EmployeePortal,
    #[at("/create-product")]
    CreateProduct,
    #[at("/create-category")]
    CreateCategory,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Roles allowed into the employee/admin back-office area.
pub const BACK_OFFICE: &[Role] = &[Role::Employee, Role::Admin];

/// What a route demands of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Anyone, authenticated or not.
    Public,
    /// Any authenticated user.
    Authenticated,
    /// Authenticated users whose role is in the set.
    Restricted(&'static [Role]),
}

/// Decision for one route evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested page.
    Render,
    /// Not authenticated: go to login, remembering where we were
    /// headed.
    RedirectLogin,
    /// Authenticated but not authorized: go home. Never to login — an
    /// authorization failure must not prompt a re-login.
    RedirectHome,
}

/// Evaluate a route's access demand against the current session role.
///
/// Called fresh on every navigation; decisions are never cached, so a
/// login or logout elsewhere is honored immediately.
pub fn guard(role: Option<Role>, access: RouteAccess) -> GuardOutcome {
    match access {
        RouteAccess::Public => GuardOutcome::Render,
        RouteAccess::Authenticated => match role {
            Some(_) => GuardOutcome::Render,
            None => GuardOutcome::RedirectLogin,
        },
        RouteAccess::Restricted(allowed) => match role {
            None => GuardOutcome::RedirectLogin,
            Some(role) if allowed.contains(&role) => GuardOutcome::Render,
            Some(_) => GuardOutcome::RedirectHome,
        },
    }
}

impl MainRoute {
    /// Access demanded by this route.
    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Home
            | Self::Login
            | Self::Register
            | Self::ForgotPassword
            | Self::Product { .. }
            | Self::NotFound => RouteAccess::Public,
            Self::Favorites | Self::MyOrders | Self::Order { .. } => RouteAccess::Authenticated,
            Self::EmployeePortal | Self::CreateProduct | Self::CreateCategory => {
                RouteAccess::Restricted(BACK_OFFICE)
            }
        }
    }

    /// Human label used in navigation and portal tiles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::ForgotPassword => "Forgot password",
            Self::Product { .. } => "Product",
            Self::Favorites => "Favorites",
            Self::MyOrders => "My Orders",
            Self::Order { .. } => "Order",
            Self::EmployeePortal => "Employee Portal",
            Self::CreateProduct => "Create Product",
            Self::CreateCategory => "Create Category",
            Self::NotFound => "Not Found",
        }
    }

    /// The create forms reachable from the employee portal.
    pub fn is_create_form(&self) -> bool {
        matches!(self, Self::CreateProduct | Self::CreateCategory)
    }
}

#[derive(Properties, PartialEq)]
struct RedirectToLoginProps {
    from: MainRoute,
}

/// Redirect to the login route, carrying the originally requested
/// route as history state so login can return the user afterward.
#[function_component(RedirectToLogin)]
fn redirect_to_login(props: &RedirectToLoginProps) -> Html {
    let navigator = use_navigator();
    use_effect_with(props.from.clone(), move |from| {
        if let Some(navigator) = navigator {
            navigator.push_with_state(&MainRoute::Login, from.clone());
        }
        || ()
    });
    Html::default()
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let role = use_selector(|state: &AppState| state.role());
    let role = *role;

    match guard(role, props.route.access()) {
        GuardOutcome::RedirectLogin => {
            return html! { <RedirectToLogin from={props.route.clone()} /> };
        }
        GuardOutcome::RedirectHome => {
            return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
        }
        GuardOutcome::Render => {}
    }

    let page = match props.route.clone() {
        MainRoute::Home => {
            // Employees and admins land in the portal, not the shop.
            if role.is_some_and(Role::is_back_office) {
                return html! { <Redirect<MainRoute> to={MainRoute::EmployeePortal} /> };
            }
            html! { <HomePage /> }
        }
        MainRoute::Login => {
            if role.is_some() {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! { <LoginPage /> }
        }
        MainRoute::Register => {
            if role.is_some() {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! { <RegisterPage /> }
        }
        MainRoute::ForgotPassword => html! { <ForgotPasswordPage /> },
        MainRoute::Product { id } => html! { <ProductDetailPage {id} /> },
        MainRoute::Favorites => html! { <FavoritesPage /> },
        MainRoute::MyOrders => html! { <MyOrdersPage /> },
        MainRoute::Order { id } => html! { <OrderDetailPage {id} /> },
        MainRoute::EmployeePortal => html! { <EmployeePortalPage /> },
        MainRoute::CreateProduct => html! { <CreateProductPage /> },
        MainRoute::CreateCategory => html! { <CreateCategoryPage /> },
        MainRoute::NotFound => {
            // Unmatched paths fall back to the shop front.
            return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
        }
    };

    html! {
        <Layout current_route={props.route.clone()}>
            { page }
        </Layout>
    }
}

/// Switch function for the storefront routes.
pub fn switch(route: MainRoute) -> Html {
    html! { <MainRouteView {route} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The guard matrix from the access-control design: back-office
    /// routes admit employees and admins, bounce shoppers home, and
    /// send the unauthenticated to login.
    #[test]
    fn back_office_guard_matrix() {
        let access = RouteAccess::Restricted(BACK_OFFICE);
        assert_eq!(guard(None, access), GuardOutcome::RedirectLogin);
        assert_eq!(guard(Some(Role::Shopper), access), GuardOutcome::RedirectHome);
        assert_eq!(guard(Some(Role::Employee), access), GuardOutcome::Render);
        assert_eq!(guard(Some(Role::Admin), access), GuardOutcome::Render);
    }

    #[test]
    fn authenticated_routes_need_any_session() {
        assert_eq!(
            guard(None, RouteAccess::Authenticated),
            GuardOutcome::RedirectLogin
        );
        for role in [Role::Shopper, Role::Employee, Role::Admin] {
            assert_eq!(
                guard(Some(role), RouteAccess::Authenticated),
                GuardOutcome::Render
            );
        }
    }

    #[test]
    fn public_routes_always_render() {
        assert_eq!(guard(None, RouteAccess::Public), GuardOutcome::Render);
        assert_eq!(
            guard(Some(Role::Shopper), RouteAccess::Public),
            GuardOutcome::Render
        );
    }

    #[test]
    fn route_access_policy() {
        assert_eq!(MainRoute::Home.access(), RouteAccess::Public);
        assert_eq!(
            MainRoute::Product { id: "p1".into() }.access(),
            RouteAccess::Public
        );
        assert_eq!(MainRoute::Favorites.access(), RouteAccess::Authenticated);
        assert_eq!(MainRoute::MyOrders.access(), RouteAccess::Authenticated);
        assert_eq!(
            MainRoute::EmployeePortal.access(),
            RouteAccess::Restricted(BACK_OFFICE)
        );
        assert_eq!(
            MainRoute::CreateCategory.access(),
            RouteAccess::Restricted(BACK_OFFICE)
        );
    }

    #[test]
    fn create_forms_are_flagged() {
        use strum::IntoEnumIterator;
        let forms: Vec<MainRoute> = MainRoute::iter()
            .filter(MainRoute::is_create_form)
            .collect();
        assert_eq!(forms, [MainRoute::CreateProduct, MainRoute::CreateCategory]);
    }

    #[test]
    fn route_paths_roundtrip() {
        assert_eq!(MainRoute::Favorites.to_path(), "/favorites");
        assert_eq!(
            MainRoute::Product { id: "p9".into() }.to_path(),
            "/product/p9"
        );
        assert_eq!(
            MainRoute::recognize("/employee-portal"),
            Some(MainRoute::EmployeePortal)
        );
        assert_eq!(MainRoute::recognize("/no-such-page"), Some(MainRoute::NotFound));
    }
}
