//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::easystore::types::Product;
use crate::error::AppError;
use crate::filters;
use crate::gemini::types::ProductCopy;
use crate::state::AppState;

use super::dashboard::{AlertTemplate, ConnectionView};

/// Tone for generated product copy.
const COPY_TONE: &str = "enthusiastic";

/// Product row view for the listing table.
#[derive(Debug, Clone)]
pub struct ProductRowView {
    pub id: i64,
    pub title: String,
    pub vendor: String,
    pub product_type: String,
    /// First variant price, already formatted for display.
    pub price: String,
    pub inventory: String,
    pub status: String,
    /// First image URL, empty when the product has none.
    pub image_src: String,
}

impl From<&Product> for ProductRowView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            vendor: product.vendor.clone(),
            product_type: product.product_type.clone(),
            price: product
                .variants
                .first()
                .map(|v| v.price.clone())
                .unwrap_or_default(),
            inventory: product.total_inventory().to_string(),
            status: if product.published_at.is_some() {
                "Active".to_string()
            } else {
                "Draft".to_string()
            },
            image_src: product
                .images
                .first()
                .map(|i| i.src.clone())
                .unwrap_or_default(),
        }
    }
}

/// Product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products.html")]
pub struct ProductsTemplate {
    pub connection: ConnectionView,
    pub current_path: String,
    pub products: Vec<ProductRowView>,
}

/// Generated product copy fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_copy.html")]
pub struct ProductCopyTemplate {
    pub product_title: String,
    pub copy: ProductCopy,
    pub tag_list: Vec<String>,
}

/// Product listing handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> ProductsTemplate {
    let data = state.data().await;
    ProductsTemplate {
        connection: ConnectionView::build(&state).await,
        current_path: "/products".to_string(),
        products: data.products.iter().map(ProductRowView::from).collect(),
    }
}

/// AI product copy handler (HTMX fragment).
///
/// The product's type and tags feed the prompt as its feature list.
#[instrument(skip(state))]
pub async fn enhance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let data = state.data().await;
    let product = data
        .products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let features = format!("{}, {}", product.product_type, product.tags);
    match state
        .gemini()
        .generate_product_description(&product.title, &features, COPY_TONE)
        .await
    {
        Ok(copy) => Ok(ProductCopyTemplate {
            product_title: product.title.clone(),
            tag_list: copy.tag_list(),
            copy,
        }
        .into_response()),
        Err(e) => {
            tracing::error!(error = %e, product_id = id, "Product copy generation failed");
            sentry::capture_error(&e);
            Ok(AlertTemplate {
                message: "Copy generation is unavailable right now. Please try again in a moment."
                    .to_string(),
            }
            .into_response())
        }
    }
}
