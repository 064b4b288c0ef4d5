//! Field-constraint checks shared by the create, full-update, and
//! partial-update merge paths.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::product::Product;

/// Minimum length of a product name, counted in characters.
pub const MIN_NAME_CHARS: usize = 2;

pub const NAME_TOO_SHORT: &str = "O nome deve conter no mínimo 2 caracteres";
pub const PRICE_NEGATIVE: &str = "O valor deve ser maior que zero";
pub const STOCK_NEGATIVE: &str = "O estoque deve ser maior que 0";

/// Ordered field → message map produced by [`validate`].
///
/// Keys are the wire field names; serializes as a flat JSON object, which
/// is the body of a partial-update 400 response.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    /// Default messages concatenated in field order, for the plain-text
    /// 400 body used by create and full update.
    pub fn concatenated(&self) -> String {
        self.0.values().copied().collect()
    }
}

/// Run the full rule set against a (possibly just-merged) record.
///
/// Returns an empty map when every constraint holds. A missing name counts
/// as too short, so sparse create payloads fail here rather than at
/// deserialization.
pub fn validate(product: &Product) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if product.name.chars().count() < MIN_NAME_CHARS {
        errors.insert("nome", NAME_TOO_SHORT);
    }
    if product.price < 0.0 {
        errors.insert("preco", PRICE_NEGATIVE);
    }
    if product.stock_quantity < 0 {
        errors.insert("quantidadeEstoque", STOCK_NEGATIVE);
    }

    errors
}
