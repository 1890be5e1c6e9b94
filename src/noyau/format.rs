// src/noyau/format.rs

use super::conversion::{Valeur, MARQUEUR_SOUS_ZERO};
use super::unite::Unite;

/// Valeur -> texte à `decimales` chiffres ; le marqueur n’est jamais formaté comme un nombre.
pub fn format_valeur(v: &Valeur, decimales: usize) -> String {
    match v {
        Valeur::SousZeroAbsolu => MARQUEUR_SOUS_ZERO.to_string(),
        Valeur::Nombre(x) => format_nombre(*x, decimales),
    }
}

/// Comme `format_valeur`, suivi du symbole (sauf pour le marqueur).
pub fn format_avec_symbole(v: &Valeur, unite: Unite, decimales: usize) -> String {
    match v {
        Valeur::SousZeroAbsolu => MARQUEUR_SOUS_ZERO.to_string(),
        Valeur::Nombre(_) => format!("{} {}", format_valeur(v, decimales), unite.symbole()),
    }
}

/// Arrondi d’affichage, sans “-0.00”.
fn format_nombre(x: f64, decimales: usize) -> String {
    let s = format!("{x:.decimales$}");
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        return s[1..].to_string();
    }
    s
}
