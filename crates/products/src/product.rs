use serde::{Deserialize, Serialize};

/// Identifier of a persisted product, assigned by the store at insert time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// Inventory item.
///
/// JSON field names follow the service's Portuguese wire format (`nome`,
/// `descricao`, `preco`, `quantidadeEstoque`) for compatibility with
/// existing clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// `None` until the store assigns an identifier.
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "quantidadeEstoque")]
    pub stock_quantity: i32,
}

impl Product {
    /// A record not yet persisted (no id assigned).
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: f64,
        stock_quantity: i32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description,
            price,
            stock_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_portuguese_wire_names() {
        let product = Product {
            id: Some(ProductId::new(7)),
            name: "Hamburguer de frango".to_string(),
            description: Some("Congelado de 500g".to_string()),
            price: 1999.99,
            stock_quantity: 80,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["nome"], "Hamburguer de frango");
        assert_eq!(json["descricao"], "Congelado de 500g");
        assert_eq!(json["preco"], 1999.99);
        assert_eq!(json["quantidadeEstoque"], 80);
    }

    #[test]
    fn deserializes_without_id_or_description() {
        let product: Product =
            serde_json::from_str(r#"{"nome":"Refrigerante","preco":5.5,"quantidadeEstoque":10}"#)
                .unwrap();

        assert_eq!(product.id, None);
        assert_eq!(product.name, "Refrigerante");
        assert_eq!(product.description, None);
        assert_eq!(product.price, 5.5);
        assert_eq!(product.stock_quantity, 10);
    }

    #[test]
    fn product_id_is_transparent_in_json() {
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ProductId::new(42));
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(id.to_string(), "42");
    }
}
