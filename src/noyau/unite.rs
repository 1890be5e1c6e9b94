// src/noyau/unite.rs
//
// Unités de température (étiquettes pures).
// Pivot canonique : Celsius. Chaque unité sait aller vers / revenir de °C.

use std::fmt;

use super::conversion::OFFSET_KELVIN;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Unite {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
    Reaumur,
}

impl Unite {
    /// Ordre d’affichage (sélecteur, résultats, colonnes de la table).
    pub const TOUTES: [Unite; 4] = [
        Unite::Celsius,
        Unite::Fahrenheit,
        Unite::Kelvin,
        Unite::Reaumur,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Unite::Celsius => "Celsius",
            Unite::Fahrenheit => "Fahrenheit",
            Unite::Kelvin => "Kelvin",
            Unite::Reaumur => "Réaumur",
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Unite::Celsius => "°C",
            Unite::Fahrenheit => "°F",
            Unite::Kelvin => "K",
            Unite::Reaumur => "°Ré",
        }
    }

    /// Valeur exprimée dans cette unité -> °C.
    pub fn vers_celsius(self, v: f64) -> f64 {
        match self {
            Unite::Celsius => v,
            Unite::Fahrenheit => (v - 32.0) * 5.0 / 9.0,
            Unite::Kelvin => v - OFFSET_KELVIN,
            Unite::Reaumur => v * 5.0 / 4.0,
        }
    }

    /// °C -> valeur exprimée dans cette unité.
    pub fn depuis_celsius(self, c: f64) -> f64 {
        match self {
            Unite::Celsius => c,
            Unite::Fahrenheit => c * 9.0 / 5.0 + 32.0,
            Unite::Kelvin => c + OFFSET_KELVIN,
            Unite::Reaumur => c * 4.0 / 5.0,
        }
    }
}

impl fmt::Display for Unite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.nom(), self.symbole())
    }
}
