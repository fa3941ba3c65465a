//! Box Colors
//!
//! The gift box colors a customer can pick, with their display styles.

use serde::Serialize;

/// Gift box color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxColor {
    Rojo,
    Azul,
    Dorado,
}

/// CSS classes used to paint a box or swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    pub background: &'static str,
    pub shadow: &'static str,
    pub ring: &'static str,
}

impl BoxColor {
    /// Selector order
    pub const ALL: [BoxColor; 3] = [BoxColor::Rojo, BoxColor::Azul, BoxColor::Dorado];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoxColor::Rojo => "rojo",
            BoxColor::Azul => "azul",
            BoxColor::Dorado => "dorado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoxColor::Rojo => "Rojo Elegante",
            BoxColor::Azul => "Azul Cielo",
            BoxColor::Dorado => "Dorado Especial",
        }
    }

    pub fn style(&self) -> BoxStyle {
        match self {
            BoxColor::Rojo => BoxStyle {
                background: "bg-red-600",
                shadow: "shadow-red-500/50",
                ring: "hover:ring-red-600",
            },
            BoxColor::Azul => BoxStyle {
                background: "bg-blue-600",
                shadow: "shadow-blue-500/50",
                ring: "hover:ring-blue-600",
            },
            BoxColor::Dorado => BoxStyle {
                background: "bg-yellow-600",
                shadow: "shadow-yellow-500/50",
                ring: "hover:ring-yellow-600",
            },
        }
    }
}
