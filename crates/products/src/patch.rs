//! Sparse partial-update payloads and their merge into an existing record.

use serde::{Deserialize, Deserializer};

use crate::product::Product;

/// Price as it arrives on the wire: a JSON integer or float.
///
/// Integers widen losslessly to floating point via [`PriceValue::widen`];
/// the widening applies to the price field only.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Integer(i64),
    Float(f64),
}

impl PriceValue {
    pub fn widen(self) -> f64 {
        match self {
            PriceValue::Integer(n) => n as f64,
            PriceValue::Float(x) => x,
        }
    }
}

/// Field assignments parsed from a PATCH body.
///
/// Only keys present in the input are applied; absent keys leave the
/// existing record untouched. `nome` and `descricao` distinguish "absent"
/// from an explicit JSON `null`. Unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ProductPatch {
    #[serde(rename = "nome", default, deserialize_with = "explicit_null")]
    pub name: Option<Option<String>>,
    #[serde(rename = "descricao", default, deserialize_with = "explicit_null")]
    pub description: Option<Option<String>>,
    #[serde(rename = "preco", default)]
    pub price: Option<PriceValue>,
    #[serde(rename = "quantidadeEstoque", default)]
    pub stock_quantity: Option<i32>,
}

impl ProductPatch {
    /// Merge the present fields into `product`.
    ///
    /// An explicit `null` clears `descricao` and empties `nome`; the merged
    /// record then fails the name length rule on re-validation.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone().unwrap_or_default();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price.widen();
        }
        if let Some(stock) = self.stock_quantity {
            product.stock_quantity = stock;
        }
    }
}

/// Maps a present value (including `null`) to `Some(..)`, so that combined
/// with `#[serde(default)]` an absent key stays `None`.
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
