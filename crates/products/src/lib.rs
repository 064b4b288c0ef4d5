//! Product domain: the entity, its validation rules, and partial-update
//! merging. Pure domain logic (no IO, no HTTP, no storage).

pub mod patch;
pub mod product;
pub mod validation;

pub use patch::{PriceValue, ProductPatch};
pub use product::{Product, ProductId};
pub use validation::{validate, FieldErrors};
