//! Noyau — table de plage
//!
//! [debut, fin] en °C -> ~10 lignes régulièrement espacées, chacune convertie.
//!
//! Contrairement à `convertir` (tout ou rien), l’échec est PAR LIGNE :
//! une ligne sous le zéro absolu porte le marqueur, les suivantes sont produites.

use super::conversion::{convertir, Valeur};
use super::unite::Unite;

/// Nombre de pas visé entre debut et fin.
const DIVISIONS: f64 = 10.0;

/// Garde-fou : borne dure sur la taille de la table.
pub const MAX_LIGNES_PLAGE: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LignePlage {
    /// Clé de la ligne (non re-dérivée).
    pub celsius: f64,
    pub fahrenheit: Valeur,
    pub kelvin: Valeur,
    pub reaumur: Valeur,
}

impl LignePlage {
    pub fn get(&self, unite: Unite) -> Valeur {
        match unite {
            Unite::Celsius => Valeur::Nombre(self.celsius),
            Unite::Fahrenheit => self.fahrenheit,
            Unite::Kelvin => self.kelvin,
            Unite::Reaumur => self.reaumur,
        }
    }

    pub fn est_echec(&self) -> bool {
        self.kelvin.est_echec()
    }
}

/// pas = max(1, floor((fin - debut) / 10))
pub fn pas_plage(debut: f64, fin: f64) -> f64 {
    ((fin - debut) / DIVISIONS).floor().max(1.0)
}

/// API publique : table des conversions de `debut` à `fin` (°C, bornes incluses).
///
/// - fin < debut => table vide (pas d’erreur)
/// - i = debut ; tant que i <= fin : ligne(i) ; i += pas
/// - garde-fous : MAX_LIGNES_PLAGE lignes au plus, arrêt si `i + pas == i` (grandes magnitudes)
pub fn generer_plage(debut: f64, fin: f64) -> Vec<LignePlage> {
    if !debut.is_finite() || !fin.is_finite() {
        log::warn!("generer_plage: bornes non finies ({debut}, {fin})");
        return Vec::new();
    }

    let pas = pas_plage(debut, fin);
    let mut lignes = Vec::new();
    let mut c = debut;

    while c <= fin {
        if lignes.len() == MAX_LIGNES_PLAGE {
            log::warn!("generer_plage: tronqué à {MAX_LIGNES_PLAGE} lignes");
            break;
        }

        let r = convertir(c, Unite::Celsius);
        lignes.push(LignePlage {
            celsius: c,
            fahrenheit: r.fahrenheit,
            kelvin: r.kelvin,
            reaumur: r.reaumur,
        });

        let suivant = c + pas;
        if suivant == c {
            log::warn!("generer_plage: pas {pas} absorbé à {c}, arrêt");
            break;
        }
        c = suivant;
    }

    log::debug!(
        "generer_plage: [{debut}, {fin}] pas={pas} -> {} lignes",
        lignes.len()
    );
    lignes
}
