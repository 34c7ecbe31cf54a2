use serde::{Deserialize, Serialize};

use super::de;
use super::moderation::ModerationStatus;
use super::user::CreatedBy;

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductRating {
    /// Average rating.
    pub rate: f64,

    /// Number of ratings the average is built from.
    pub count: u32,
}

/// Catalog entry as returned by the paged listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// External identifier; referenced by the favorites set.
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,

    /// Display title.
    pub title: String,

    /// Unit price.
    pub price: f64,

    /// Category name as the backend exposes it.
    #[serde(default)]
    pub category: String,

    /// Product image URL.
    #[serde(default)]
    pub image: String,

    /// Long description.
    #[serde(default)]
    pub description: String,

    /// Aggregate rating.
    #[serde(default)]
    pub rating: ProductRating,
}

/// Detailed product shape returned by the per-product endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    /// External identifier.
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,

    /// Display title.
    pub title: String,

    /// Unit price.
    pub price: f64,

    /// Long description.
    #[serde(default)]
    pub description: String,

    /// Category name.
    #[serde(default)]
    pub category: String,

    /// Product image URL.
    #[serde(default)]
    pub image: String,

    /// Aggregate rating.
    #[serde(default)]
    pub rating: ProductRating,

    /// Total stocked units.
    #[serde(default)]
    pub inventory_total: u32,

    /// Units currently available for sale.
    #[serde(default)]
    pub inventory_available: u32,

    /// Backend-computed stock flags.
    #[serde(default)]
    pub is_low_stock: bool,
    #[serde(default)]
    pub is_out_of_stock: bool,
    #[serde(default)]
    pub is_in_stock: bool,
}

/// Paging envelope for the product listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedProducts {
    /// Products on this page.
    pub items: Vec<Product>,

    /// One-based page index.
    pub page: u32,

    /// Requested page size.
    pub page_size: u32,

    /// Total matching products.
    pub total_items: u64,

    /// Total pages at this page size.
    pub total_pages: u32,

    /// Whether another page follows this one.
    pub has_more: bool,
}

/// Sort key accepted by the product listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Title,
    Rating,
}

impl SortBy {
    /// Query-parameter value the backend expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Rating => "Rating",
        }
    }
}

/// Sort direction accepted by the product listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    /// Query-parameter value the backend expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "Asc",
            Self::Desc => "Desc",
        }
    }
}

/// Client-constructed payload for the create-product form.
///
/// Carries both `categoryId` and `category` so the backend can pick
/// whichever it understands; the form fills the id and leaves the name
/// empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Display title.
    pub title: String,

    /// Unit price; validated positive before submission.
    pub price: f64,

    /// Category identifier, when the backend keys categories by id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// Category name, when the backend keys categories by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Long description.
    pub description: String,

    /// Product image URL.
    pub image: String,

    /// Initial stocked units.
    pub inventory: u32,

    /// Moderation status derived from the submitting role.
    pub status: ModerationStatus,

    /// Attribution of the submitting actor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<CreatedBy>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn paged_envelope_deserializes() {
        let body = r#"{
            "items": [
                {"id": 1, "title": "Keyboard", "price": 49.5,
                 "category": "electronics", "image": "https://img/k.png",
                 "description": "clacky", "rating": {"rate": 4.5, "count": 120}}
            ],
            "page": 1, "pageSize": 12, "totalItems": 1,
            "totalPages": 1, "hasMore": false
        }"#;
        let paged: PagedProducts = serde_json::from_str(body).unwrap();
        assert_eq!(paged.items.len(), 1);
        assert_eq!(paged.items[0].id, "1");
        assert_eq!(paged.page_size, 12);
        assert!(!paged.has_more);
    }

    #[test]
    fn detail_tolerates_missing_stock_flags() {
        let body = r#"{"id":"p1","title":"Mug","price":9.99}"#;
        let detail: ProductDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.inventory_available, 0);
        assert!(!detail.is_in_stock);
    }

    #[test]
    fn draft_serializes_camel_case() {
        let draft = ProductDraft {
            title: "Mug".into(),
            price: 9.99,
            category_id: Some("c1".into()),
            category: None,
            description: "ceramic".into(),
            image: "https://img/m.png".into(),
            inventory: 5,
            status: ModerationStatus::for_role(Role::Admin),
            created_by: Some(CreatedBy {
                id: "u1".into(),
                role: Role::Admin,
            }),
        };
        let text = serde_json::to_string(&draft).unwrap();
        assert!(text.contains(r#""categoryId":"c1""#));
        assert!(text.contains(r#""status":"approved""#));
        assert!(text.contains(r#""createdBy":{"id":"u1","role":"admin"}"#));
        assert!(!text.contains(r#""category":"#));
    }

    #[test]
    fn sort_params_match_backend_casing() {
        assert_eq!(SortBy::Title.as_str(), "Title");
        assert_eq!(SortBy::Rating.as_str(), "Rating");
        assert_eq!(SortDir::Desc.as_str(), "Desc");
        assert_eq!(SortDir::Asc.as_str(), "Asc");
    }
}
