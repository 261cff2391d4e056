pub mod product;
pub mod delivery;

pub use product::{Catalog, CatalogError, Product};
pub use delivery::{DeliveryOption, DeliveryOptionTable};
