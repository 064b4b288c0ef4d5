use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post, put},
};

use estoque_products::{ProductId, ProductPatch, validate};

use crate::app::services::{ProductService, ServiceError};
use crate::app::{dto, errors};

pub const MSG_INSERTED: &str = "Produto inserido com sucesso";
pub const MSG_UPDATED: &str = "Produto atualizado com sucesso";
pub const MSG_DELETED: &str = "Produto excluido com sucesso!";
pub const MSG_BAD_REQUEST: &str = "Erro na requisição.";
pub const MSG_NON_NUMERIC: &str = "Os campos preco e quantidadeEstoque devem ser numéricos.";
pub const MSG_ID_NOT_FOUND: &str = "Id não encontrado";
pub const MSG_PRODUCT_NOT_FOUND: &str = "Produto não encontrado";
// Sic: the historical wire string on the partial-update path has no accent.
pub const MSG_PATCH_NOT_FOUND: &str = "Produto nao encontrado";

pub fn router() -> Router {
    Router::new()
        .route("/selecionar", get(list_products))
        .route("/inserir", post(insert_product))
        .route("/excluir/:id", delete(delete_product))
        .route("/atualizar/:id", put(update_product))
        .route("/atualizarParcial/:id", patch(patch_product))
        .route("/buscarPorNome", get(search_by_name))
}

pub async fn list_products(
    Extension(service): Extension<Arc<ProductService>>,
) -> axum::response::Response {
    match service.list_all().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn insert_product(
    Extension(service): Extension<Arc<ProductService>>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    let payload: dto::ProductPayload = match serde_json::from_value(body.clone()) {
        Ok(payload) => payload,
        Err(_) if dto::has_non_numeric_fields(&body) => {
            return errors::text(StatusCode::BAD_REQUEST, MSG_NON_NUMERIC);
        }
        Err(_) => return errors::text(StatusCode::BAD_REQUEST, MSG_BAD_REQUEST),
    };

    let product = payload.into_product();
    let violations = validate(&product);
    if !violations.is_empty() {
        return errors::text(StatusCode::BAD_REQUEST, violations.concatenated());
    }

    match service.save(product).await {
        Ok(saved) if saved.id.is_some_and(|id| id.get() > 0) => {
            errors::text(StatusCode::OK, MSG_INSERTED)
        }
        // A missing or non-positive generated id is a store malfunction;
        // store failures get the same generic answer.
        Ok(_) | Err(_) => errors::text(StatusCode::BAD_REQUEST, MSG_BAD_REQUEST),
    }
}

pub async fn delete_product(
    Extension(service): Extension<Arc<ProductService>>,
    Path(id): Path<ProductId>,
) -> axum::response::Response {
    match service.delete(id).await {
        Ok(_) => errors::text(StatusCode::OK, MSG_DELETED),
        Err(ServiceError::NotFound) => errors::text(StatusCode::NOT_FOUND, MSG_ID_NOT_FOUND),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(service): Extension<Arc<ProductService>>,
    Path(id): Path<ProductId>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    let payload: dto::ProductPayload = match serde_json::from_value(body) {
        Ok(payload) => payload,
        Err(_) => return errors::text(StatusCode::BAD_REQUEST, MSG_BAD_REQUEST),
    };

    let mut existing = match service.get_by_id(id).await {
        Ok(product) => product,
        // Full update answers an unknown id with an empty 404 body.
        Err(ServiceError::NotFound) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => return errors::service_error_to_response(e),
    };

    let replacement = payload.into_product();
    existing.name = replacement.name;
    existing.description = replacement.description;
    existing.price = replacement.price;
    existing.stock_quantity = replacement.stock_quantity;

    let violations = validate(&existing);
    if !violations.is_empty() {
        return errors::text(StatusCode::BAD_REQUEST, violations.concatenated());
    }

    match service.save(existing).await {
        Ok(_) => errors::text(StatusCode::OK, MSG_UPDATED),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn patch_product(
    Extension(service): Extension<Arc<ProductService>>,
    Path(id): Path<ProductId>,
    Json(body): Json<ProductPatch>,
) -> axum::response::Response {
    let mut product = match service.get_by_id(id).await {
        Ok(product) => product,
        Err(_) => return errors::text(StatusCode::NOT_FOUND, MSG_PATCH_NOT_FOUND),
    };

    body.apply(&mut product);

    let violations = validate(&product);
    if !violations.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(violations)).into_response();
    }

    match service.save(product).await {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(_) => errors::text(StatusCode::NOT_FOUND, MSG_PATCH_NOT_FOUND),
    }
}

pub async fn search_by_name(
    Extension(service): Extension<Arc<ProductService>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    match service.search_by_name(&params.nome, params.preco).await {
        Ok(products) if products.is_empty() => {
            errors::text(StatusCode::NOT_FOUND, MSG_PRODUCT_NOT_FOUND)
        }
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
