// src/noyau/saisie.rs
//
// Lecture du texte brut -> nombre fini.
// Le moteur n’est JAMAIS appelé sur une saisie rejetée (vide, non numérique, NaN/∞).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurSaisie {
    #[error("Entrée vide")]
    Vide,

    #[error("« {0} » n’est pas un nombre")]
    NonNumerique(String),

    #[error("« {0} » n’est pas un nombre fini")]
    NonFini(String),
}

/// Texte brut -> f64 fini.
///
/// Accepte : espaces autour, signe, exposant (`1e3`), virgule décimale (`12,5`).
/// Rejette : vide, texte, `NaN`, `inf`.
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurSaisie> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurSaisie::Vide);
    }

    // virgule décimale (une seule, pas de séparateur de milliers)
    let normalise = if s.matches(',').count() == 1 && !s.contains('.') {
        s.replace(',', ".")
    } else {
        s.to_string()
    };

    let v: f64 = normalise
        .parse()
        .map_err(|_| ErreurSaisie::NonNumerique(s.to_string()))?;

    if !v.is_finite() {
        return Err(ErreurSaisie::NonFini(s.to_string()));
    }

    Ok(v)
}
