// src/app.rs
//
// Thermo Q-pur — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + contenu.rs)
// - Ré-exporter AppThermo (pour main.rs: use crate::app::AppThermo;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Porter le titre de l’application (main.rs + vue.rs)

pub mod contenu;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppThermo;`
pub use etat::AppThermo;

/// Titre unique (fenêtre native, onglet web, en-tête).
pub const TITRE_APP: &str = "Thermo Q-pur";

use eframe::egui;

impl eframe::App for AppThermo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Thème : appliqué seulement quand il change.
        let theme = if self.mode_sombre {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        };
        if ctx.theme() != theme {
            ctx.set_theme(theme);
        }

        // ESC = ferme la popup ouverte, sinon efface l’entrée.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            if self.popup.is_some() {
                self.fermer_popup();
            } else {
                self.clear_entree();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });

        self.ui_popups(ctx);
    }
}
