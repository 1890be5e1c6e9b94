//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état du convertisseur (entrée, unité, résultats, table, popups,
//! thème, curseur) et offrir des opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - Le noyau n’est appelé QUE sur une saisie validée (`lire_nombre` Ok).
//! - Actions déterministes, sans effet de bord caché.
//! - L’aimant à zéro du curseur reste ici (présentation), jamais dans le noyau.

use thermo_qpur::noyau::{
    convertir, generer_plage, lire_nombre, Conversion, ErreurSaisie, LignePlage, Unite,
};

use super::contenu::FAITS;

/// Décimales affichées (résultats + table).
pub const DECIMALES: usize = 2;

/// Bornes par défaut de la table de plage (°C).
const PLAGE_DEBUT_DEFAUT: &str = "0";
const PLAGE_FIN_DEFAUT: &str = "100";

/// Bornes du curseur (dans l’unité active).
pub const CURSEUR_MIN: f64 = -100.0;
pub const CURSEUR_MAX: f64 = 200.0;

/// Aimant : |v| < seuil => 0 exactement.
const SEUIL_AIMANT_ZERO: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Popup {
    Unite(Unite),
    APropos,
}

#[derive(Clone, Debug)]
pub struct AppThermo {
    // --- entrée utilisateur ---
    pub entree: String,
    pub unite: Unite,
    pub curseur: f64,

    // --- sorties ---
    pub resultats: Option<Conversion>, // None => affichage “placeholder”
    pub erreur: String,                // saisie non numérique (vide => pas de message)

    // --- table de plage ---
    pub plage_debut: String,
    pub plage_fin: String,
    pub table: Vec<LignePlage>,
    pub erreur_plage: String,

    // --- UX ---
    pub mode_sombre: bool,
    pub popup: Option<Popup>,
    pub fait: usize,
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppThermo {
    fn default() -> Self {
        Self {
            entree: String::new(),
            unite: Unite::Celsius,
            curseur: 0.0,
            resultats: None,
            erreur: String::new(),
            plage_debut: PLAGE_DEBUT_DEFAUT.to_string(),
            plage_fin: PLAGE_FIN_DEFAUT.to_string(),
            table: Vec::new(),
            erreur_plage: String::new(),
            mode_sombre: false,
            popup: None,
            fait: 0,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppThermo {
    /* ------------------------ Conversion ------------------------ */

    /// Relit l’entrée et reconvertit. Vide => placeholder sans message.
    pub fn recalculer(&mut self) {
        match lire_nombre(&self.entree) {
            Ok(v) => {
                self.resultats = Some(convertir(v, self.unite));
                self.erreur.clear();
                self.curseur = v.clamp(CURSEUR_MIN, CURSEUR_MAX);
            }
            Err(ErreurSaisie::Vide) => {
                self.resultats = None;
                self.erreur.clear();
            }
            Err(e) => {
                self.resultats = None;
                self.erreur = e.to_string();
            }
        }
    }

    pub fn set_entree(&mut self, texte: impl Into<String>) {
        self.entree = texte.into();
        self.recalculer();
    }

    /// Changer d’unité source reconvertit l’entrée courante.
    pub fn set_unite(&mut self, unite: Unite) {
        if self.unite == unite {
            return;
        }
        log::debug!("unité source : {} -> {}", self.unite.symbole(), unite.symbole());
        self.unite = unite;
        self.recalculer();
        self.focus_entree = true;
    }

    /// Curseur -> entrée (avec aimant à zéro), puis reconversion.
    pub fn set_curseur(&mut self, v: f64) {
        let v = aimant_zero(v.clamp(CURSEUR_MIN, CURSEUR_MAX));
        self.curseur = v;
        self.entree = texte_curseur(v);
        self.recalculer();
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Reset : entrée + résultats + curseur + unité par défaut.
    pub fn reset_total(&mut self) {
        log::info!("reset");
        self.entree.clear();
        self.unite = Unite::Celsius;
        self.curseur = 0.0;
        self.resultats = None;
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// ESC : effacer seulement l’entrée (les résultats suivent).
    pub fn clear_entree(&mut self) {
        self.set_entree(String::new());
        self.focus_entree = true;
    }

    /// Relit les deux bornes puis (re)génère la table.
    pub fn generer_table(&mut self) {
        let debut = match lire_nombre(&self.plage_debut) {
            Ok(v) => v,
            Err(e) => return self.set_erreur_plage("Début", e),
        };
        let fin = match lire_nombre(&self.plage_fin) {
            Ok(v) => v,
            Err(e) => return self.set_erreur_plage("Fin", e),
        };

        self.erreur_plage.clear();
        self.table = generer_plage(debut, fin);
    }

    fn set_erreur_plage(&mut self, borne: &str, e: ErreurSaisie) {
        self.erreur_plage = format!("{borne} : {e}");
        self.table.clear();
    }

    pub fn basculer_mode_sombre(&mut self) {
        self.mode_sombre = !self.mode_sombre;
        log::info!("mode sombre : {}", self.mode_sombre);
    }

    pub fn ouvrir_popup(&mut self, popup: Popup) {
        self.popup = Some(popup);
    }

    pub fn fermer_popup(&mut self) {
        self.popup = None;
    }

    pub fn fait_courant(&self) -> &'static str {
        FAITS[self.fait % FAITS.len()]
    }

    pub fn fait_suivant(&mut self) {
        self.fait = (self.fait + 1) % FAITS.len();
    }
}

/// |v| < SEUIL_AIMANT_ZERO => 0.
fn aimant_zero(v: f64) -> f64 {
    if v.abs() < SEUIL_AIMANT_ZERO {
        0.0
    } else {
        v
    }
}

/// Valeur du curseur -> texte d’entrée (au dixième, sans “.0” inutile).
fn texte_curseur(v: f64) -> String {
    let r = (v * 10.0).round() / 10.0;
    format!("{r}")
}
