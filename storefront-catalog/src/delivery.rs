use serde::{Deserialize, Serialize};

use crate::product::CatalogError;

/// A shipping tier: how many business days it takes and what it costs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOption {
    pub id: String,
    pub delivery_days: u32,
    pub price_cents: u64,
}

impl DeliveryOption {
    pub fn new(id: impl Into<String>, delivery_days: u32, price_cents: u64) -> Self {
        Self {
            id: id.into(),
            delivery_days,
            price_cents,
        }
    }
}

/// Lookup table of delivery options keyed by id.
///
/// The table is small and fixed for the lifetime of the process, so a
/// linear scan is all the indexing it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOptionTable {
    options: Vec<DeliveryOption>,
}

impl DeliveryOptionTable {
    pub fn new(options: Vec<DeliveryOption>) -> Result<Self, CatalogError> {
        for (position, option) in options.iter().enumerate() {
            if options[..position].iter().any(|o| o.id == option.id) {
                return Err(CatalogError::DuplicateDeliveryOption(option.id.clone()));
            }
        }

        Ok(Self { options })
    }

    /// The three tiers offered by the store: free weekly, 3-day and next-day
    pub fn standard() -> Self {
        Self {
            options: vec![
                DeliveryOption::new("1", 7, 0),
                DeliveryOption::new("2", 3, 49),
                DeliveryOption::new("3", 1, 99),
            ],
        }
    }

    pub fn get(&self, option_id: &str) -> Option<&DeliveryOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    pub fn options(&self) -> &[DeliveryOption] {
        &self.options
    }
}

impl Default for DeliveryOptionTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = DeliveryOptionTable::standard();

        assert_eq!(table.options().len(), 3);
        assert_eq!(table.get("1"), Some(&DeliveryOption::new("1", 7, 0)));
        assert_eq!(table.get("2").unwrap().price_cents, 49);
        assert_eq!(table.get("3").unwrap().delivery_days, 1);
        assert!(table.get("4").is_none());
    }

    #[test]
    fn test_custom_table_lookup() {
        let table = DeliveryOptionTable::new(vec![DeliveryOption::new("express", 0, 1500)]).unwrap();

        assert_eq!(table.get("express").unwrap().delivery_days, 0);
        assert!(table.get("1").is_none());
    }

    #[test]
    fn test_duplicate_option_rejected() {
        let result = DeliveryOptionTable::new(vec![
            DeliveryOption::new("1", 7, 0),
            DeliveryOption::new("1", 2, 10),
        ]);

        assert!(matches!(result, Err(CatalogError::DuplicateDeliveryOption(id)) if id == "1"));
    }

    #[test]
    fn test_wire_format() {
        let value = serde_json::to_value(DeliveryOption::new("2", 3, 49)).unwrap();
        assert_eq!(value, serde_json::json!({ "id": "2", "deliveryDays": 3, "priceCents": 49 }));
    }
}
