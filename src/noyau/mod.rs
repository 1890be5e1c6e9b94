//! Noyau de conversion (pur, sans UI)
//!
//! Organisation interne :
//! - unite.rs      : unités (°C, °F, K, °Ré) + passage par le pivot °C
//! - conversion.rs : moteur `convertir` + garde zéro absolu (tout ou rien)
//! - plage.rs      : table de plage `generer_plage` (échec par ligne)
//! - saisie.rs     : texte brut -> nombre fini (côté appelant)
//! - format.rs     : affichage à N décimales, marqueur jamais formaté en nombre

pub mod conversion;
pub mod format;
pub mod plage;
pub mod saisie;
pub mod unite;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use conversion::{convertir, Conversion, Mesure, Valeur};
pub use format::{format_avec_symbole, format_valeur};
pub use plage::{generer_plage, pas_plage, LignePlage};
pub use saisie::{lire_nombre, ErreurSaisie};
pub use unite::Unite;
