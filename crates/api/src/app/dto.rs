use serde::Deserialize;

use estoque_products::{PriceValue, Product};

/// Create/full-update payload.
///
/// Every field is optional at the wire level: a missing name surfaces as a
/// validation error, missing numeric fields take zero. The price accepts
/// integer or float encodings ([`PriceValue`]).
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "preco", default)]
    pub price: Option<PriceValue>,
    #[serde(rename = "quantidadeEstoque", default)]
    pub stock_quantity: Option<i32>,
}

impl ProductPayload {
    /// Unsaved record, ready for validation and insert.
    pub fn into_product(self) -> Product {
        Product::new(
            self.name.unwrap_or_default(),
            self.description,
            self.price.map(PriceValue::widen).unwrap_or(0.0),
            self.stock_quantity.unwrap_or(0),
        )
    }
}

/// Query parameters of `GET /buscarPorNome`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub nome: String,
    pub preco: f64,
}

/// True when the body holds a non-numeric value in one of the numeric
/// fields; picks between the numeric-fields 400 and the generic 400 on
/// create.
pub fn has_non_numeric_fields(body: &serde_json::Value) -> bool {
    ["preco", "quantidadeEstoque"].iter().any(|key| {
        body.get(*key)
            .is_some_and(|value| !value.is_null() && !value.is_number())
    })
}
