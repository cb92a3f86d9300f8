//! Product field input and validation.
//!
//! Incoming fields are all optional. `ProductFields::into_patch` checks and
//! normalizes whatever is present; creation additionally requires every
//! field through `ProductPatch::into_draft`.

use crate::error::{CatalogError, Result};
use crate::store::{NewProduct, Photo, Product};

/// Raw product fields as received from a caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFields {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category: Option<String>,
}

/// Validated, normalized subset of product fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub category: Option<String>,
}

/// Every field a new product needs except its photo.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
}

impl ProductFields {
    /// Validates present fields. Blank strings count as absent; categories
    /// are lowercased.
    pub fn into_patch(self) -> Result<ProductPatch> {
        let price = match self.price {
            Some(p) if !p.is_finite() || p < 0.0 => {
                return Err(CatalogError::Validation(
                    "Price must be a non-negative number".to_string(),
                ))
            }
            other => other,
        };

        let stock = self
            .stock
            .map(|s| {
                u32::try_from(s).map_err(|_| {
                    CatalogError::Validation("Stock must be a non-negative integer".to_string())
                })
            })
            .transpose()?;

        Ok(ProductPatch {
            name: non_blank(self.name),
            price,
            stock,
            category: non_blank(self.category).map(|c| c.to_lowercase()),
        })
    }
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock.is_none() && self.category.is_none()
    }

    /// Requires every field to be present.
    pub fn into_draft(self) -> Result<ProductDraft> {
        match (self.name, self.price, self.stock, self.category) {
            (Some(name), Some(price), Some(stock), Some(category)) => Ok(ProductDraft {
                name,
                price,
                stock,
                category,
            }),
            _ => Err(CatalogError::Validation(
                "Please enter All Fields".to_string(),
            )),
        }
    }

    /// Overwrites only the fields present in the patch.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
    }
}

impl ProductDraft {
    pub fn with_photo(self, photo: Photo) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            stock: self.stock,
            category: self.category,
            photo,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> ProductFields {
        ProductFields {
            name: Some("  Trail Runner ".to_string()),
            price: Some(0.0),
            stock: Some(0),
            category: Some(" Shoes".to_string()),
        }
    }

    #[test]
    fn test_full_fields_normalize() {
        let draft = full().into_patch().unwrap().into_draft().unwrap();
        assert_eq!(draft.name, "Trail Runner");
        assert_eq!(draft.category, "shoes");
        assert_eq!(draft.price, 0.0);
        assert_eq!(draft.stock, 0);
    }

    #[test]
    fn test_missing_field_rejected() {
        let fields = ProductFields {
            category: None,
            ..full()
        };
        let result = fields.into_patch().unwrap().into_draft();
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_blank_name_is_missing() {
        let fields = ProductFields {
            name: Some("   ".to_string()),
            ..full()
        };
        let patch = fields.into_patch().unwrap();
        assert!(patch.name.is_none());
        assert!(patch.into_draft().is_err());
    }

    #[test]
    fn test_negative_values_rejected() {
        let price = ProductFields {
            price: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(price.into_patch(), Err(CatalogError::Validation(_))));

        let stock = ProductFields {
            stock: Some(-3),
            ..Default::default()
        };
        assert!(matches!(stock.into_patch(), Err(CatalogError::Validation(_))));

        let nan = ProductFields {
            price: Some(f64::NAN),
            ..Default::default()
        };
        assert!(nan.into_patch().is_err());
    }

    #[test]
    fn test_empty_patch() {
        let patch = ProductFields::default().into_patch().unwrap();
        assert!(patch.is_empty());
    }
}
