//! Product Catalog
//!
//! The four chocotejas on sale. Defined once, never mutated.

use serde::Serialize;

use crate::money::Money;

/// Catalog entry identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductId {
    Oreo,
    Almendras,
    FrutosSecos,
    Clasica,
}

impl ProductId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductId::Oreo => "oreo",
            ProductId::Almendras => "almendras",
            ProductId::FrutosSecos => "frutos-secos",
            ProductId::Clasica => "clasica",
        }
    }
}

/// A product shown in the catalog grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub description: &'static str,
    pub price: Money,
    /// Image path relative to the site root
    pub image: &'static str,
}

static CATALOG: [Product; 4] = [
    Product {
        id: ProductId::Oreo,
        name: "Chocoteja Oreo",
        description: "Delicioso chocolate con trozos de galleta Oreo crujiente",
        price: Money::from_units(25),
        image: "assets/chocoteja-oreo.jpg",
    },
    Product {
        id: ProductId::Almendras,
        name: "Chocoteja de Frutos Rojos",
        description: "Chocolate premium con pecanas tostadas seleccionadas y frutos rojos orgánicos",
        price: Money::from_units(28),
        image: "assets/chocoteja-almendras.jpg",
    },
    Product {
        id: ProductId::FrutosSecos,
        name: "Chocoteja de Frutos Secos",
        description: "Mezcla especial de frutos secos y chocolate artesanal",
        price: Money::from_units(30),
        image: "assets/chocoteja-frutos-secos.jpg",
    },
    Product {
        id: ProductId::Clasica,
        name: "Chocoteja de Aguaymantos",
        description: "Una mezcla amazónica con sabores exóticos que todos aman",
        price: Money::from_units(22),
        image: "assets/chocoteja-clasica.jpg",
    },
];

/// All products in display order
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

pub fn find_product(id: ProductId) -> &'static Product {
    match id {
        ProductId::Oreo => &CATALOG[0],
        ProductId::Almendras => &CATALOG[1],
        ProductId::FrutosSecos => &CATALOG[2],
        ProductId::Clasica => &CATALOG[3],
    }
}
