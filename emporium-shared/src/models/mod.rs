//! Data models shared between the storefront UI and its REST backend.

pub mod category;
pub mod errors;
pub mod moderation;
pub mod order;
pub mod product;
pub mod role;
pub mod user;

mod de;

pub use category::{Category, CategoryCreator, CategoryDraft};
pub use errors::ErrorResponse;
pub use moderation::ModerationStatus;
pub use order::Order;
pub use product::{
    PagedProducts, Product, ProductDetail, ProductDraft, ProductRating, SortBy, SortDir,
};
pub use role::Role;
pub use user::{
    AuthResponse, CreatedBy, LoginRequest, RegisterRequest, Session, SessionUser, UserPayload,
};
