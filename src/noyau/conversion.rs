//! Noyau — moteur de conversion
//!
//! valeur + unité source -> °C (pivot) -> garde zéro absolu -> 4 unités
//!
//! Politique “tout ou rien” : si la mesure implique K < 0, les quatre champs
//! portent le marqueur `SousZeroAbsolu`, jamais un résultat partiel.

use std::fmt;

use super::unite::Unite;

/// Décalage °C -> K.
pub const OFFSET_KELVIN: f64 = 273.15;

/// Zéro absolu exprimé en °C.
pub const ZERO_ABSOLU_C: f64 = -OFFSET_KELVIN;

/// Texte du marqueur d’échec (affiché à la place d’un nombre).
pub const MARQUEUR_SOUS_ZERO: &str = "sous le zéro absolu";

/// Un champ de résultat : un nombre pleine précision, ou le marqueur d’échec.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Valeur {
    Nombre(f64),
    SousZeroAbsolu,
}

impl Valeur {
    pub fn nombre(self) -> Option<f64> {
        match self {
            Valeur::Nombre(v) => Some(v),
            Valeur::SousZeroAbsolu => None,
        }
    }

    pub fn est_echec(self) -> bool {
        matches!(self, Valeur::SousZeroAbsolu)
    }
}

impl fmt::Display for Valeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Valeur::Nombre(v) => write!(f, "{v}"),
            Valeur::SousZeroAbsolu => f.write_str(MARQUEUR_SOUS_ZERO),
        }
    }
}

/// Résultat d’une conversion : une valeur par unité.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion {
    pub celsius: Valeur,
    pub fahrenheit: Valeur,
    pub kelvin: Valeur,
    pub reaumur: Valeur,
}

impl Conversion {
    fn echec() -> Self {
        Self {
            celsius: Valeur::SousZeroAbsolu,
            fahrenheit: Valeur::SousZeroAbsolu,
            kelvin: Valeur::SousZeroAbsolu,
            reaumur: Valeur::SousZeroAbsolu,
        }
    }

    pub fn get(&self, unite: Unite) -> Valeur {
        match unite {
            Unite::Celsius => self.celsius,
            Unite::Fahrenheit => self.fahrenheit,
            Unite::Kelvin => self.kelvin,
            Unite::Reaumur => self.reaumur,
        }
    }

    /// false si la mesure est physiquement impossible (sous le zéro absolu).
    pub fn est_valide(&self) -> bool {
        !self.celsius.est_echec()
    }
}

/// Une mesure (valeur, unité). Créée à chaque conversion, jamais mutée.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mesure {
    pub valeur: f64,
    pub unite: Unite,
}

impl Mesure {
    pub fn new(valeur: f64, unite: Unite) -> Self {
        Self { valeur, unite }
    }

    pub fn convertir(self) -> Conversion {
        convertir(self.valeur, self.unite)
    }
}

/// API publique : convertit `valeur` (exprimée en `depuis`) dans les quatre unités.
///
/// `valeur` doit être finie : la validation du texte brut est à la charge de
/// l’appelant (voir `saisie::lire_nombre`). Aucune borne haute.
pub fn convertir(valeur: f64, depuis: Unite) -> Conversion {
    // 1) pivot °C
    let celsius = depuis.vers_celsius(valeur);

    // 2) garde zéro absolu (tout ou rien)
    let kelvin = celsius + OFFSET_KELVIN;
    if kelvin < 0.0 {
        log::debug!("{valeur} {} : sous le zéro absolu (K = {kelvin})", depuis.symbole());
        return Conversion::echec();
    }

    // 3) toutes les unités depuis le pivot
    Conversion {
        celsius: Valeur::Nombre(celsius),
        fahrenheit: Valeur::Nombre(Unite::Fahrenheit.depuis_celsius(celsius)),
        kelvin: Valeur::Nombre(kelvin),
        reaumur: Valeur::Nombre(Unite::Reaumur.depuis_celsius(celsius)),
    }
}
