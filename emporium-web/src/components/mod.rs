pub(crate) mod loading;
pub(crate) mod order_table;
pub(crate) mod product_card;
pub(crate) mod user_dropdown;

pub(crate) use loading::Loading;
pub(crate) use order_table::OrderTable;
pub(crate) use product_card::ProductCard;
