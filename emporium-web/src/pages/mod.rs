mod create_category;
mod create_product;
mod employee_portal;
mod favorites;
mod forgot_password;
mod home;
mod login;
mod my_orders;
mod order_detail;
mod product_detail;
mod register;

pub use create_category::CreateCategoryPage;
pub use create_product::CreateProductPage;
pub use employee_portal::EmployeePortalPage;
pub use favorites::FavoritesPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use my_orders::{MyOrdersPage, demo_orders};
pub use order_detail::OrderDetailPage;
pub use product_detail::ProductDetailPage;
pub use register::RegisterPage;
