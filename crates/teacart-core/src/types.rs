//! # Domain Types
//!
//! Catalog snapshot types handed to the core by the menu screens.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │   │   SizeOption    │   │  ToppingOption  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  size           │   │  id             │       │
//! │  │  base_price     │   │  label          │   │  name           │       │
//! │  │  description    │   │  price_delta    │   │  price          │       │
//! │  │  image          │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                        ┌─────────────────┐                              │
//! │                        │      Size       │                              │
//! │                        │  Small < Medium │                              │
//! │                        │        < Large  │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are owned by the menu/catalog screens. The core only reads
//! them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Catalog Item
// =============================================================================

/// A purchasable drink as listed on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogItem {
    /// Display name, also the cart identity of the drink.
    pub name: String,

    /// Price of the smallest size with no toppings.
    pub base_price: Money,

    /// Long-form description shown in the drink modal.
    pub description: String,

    /// Image reference (asset path or URL), opaque to the core.
    pub image: String,
}

impl CatalogItem {
    /// Creates a catalog item with an empty description and image.
    pub fn new(name: impl Into<String>, base_price: Money) -> Self {
        CatalogItem {
            name: name.into(),
            base_price,
            description: String::new(),
            image: String::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

// =============================================================================
// Size
// =============================================================================

/// Cup size.
///
/// Ordered from smallest to largest so the default size of a menu is simply
/// its minimum.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    #[default]
    Small,
    Medium,
    Large,
}

/// One size offered by the menu together with its surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SizeOption {
    pub size: Size,
    /// Label shown next to the radio button, e.g. "Vừa".
    pub label: String,
    /// Amount added to the base price.
    pub price_delta: Money,
}

impl SizeOption {
    pub fn new(size: Size, label: impl Into<String>, price_delta: Money) -> Self {
        SizeOption {
            size,
            label: label.into(),
            price_delta,
        }
    }
}

// =============================================================================
// Topping
// =============================================================================

/// A topping from the fixed topping catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToppingOption {
    pub id: String,
    pub name: String,
    pub price: Money,
}

impl ToppingOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        ToppingOption {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
