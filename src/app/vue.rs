// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppThermo (etat.rs) pour natif + wasm
// - Conversion à chaque frappe (pas de bouton “=”)
// - Tactile : gros boutons d’unité, focus redonné après clic (focus_entree)
// - Le marqueur “sous le zéro absolu” n’est jamais passé au formatage numérique

use eframe::egui;

use thermo_qpur::noyau::{convertir, format_avec_symbole, format_valeur, Conversion, Unite};

use super::contenu::{fiche, REPERES_C};
use super::etat::{AppThermo, Popup, CURSEUR_MAX, CURSEUR_MIN, DECIMALES};
use super::TITRE_APP;

impl AppThermo {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_table(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_fait(ui);
            });
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(TITRE_APP);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("À propos").clicked() {
                    self.ouvrir_popup(Popup::APropos);
                }

                let mut sombre = self.mode_sombre;
                if ui.checkbox(&mut sombre, "Mode sombre").changed() {
                    self.basculer_mode_sombre();
                }
            });
        });
        ui.label("Celsius, Fahrenheit, Kelvin et Réaumur");
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Température :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 36.6, -40, 1e3")
                .id_salt("entree_temperature"),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        if resp.changed() {
            self.recalculer();
        }

        ui.add_space(6.0);

        // Unité source (+ fiche d’info par unité)
        ui.label("Depuis :");
        ui.horizontal_wrapped(|ui| {
            for u in Unite::TOUTES {
                let choisi = self.unite == u;
                let resp = ui
                    .add_sized([96.0, 30.0], egui::Button::new(u.nom()).selected(choisi))
                    .on_hover_text(u.symbole());
                if resp.clicked() {
                    self.set_unite(u);
                }

                if ui.small_button("?").on_hover_text("En savoir plus").clicked() {
                    self.ouvrir_popup(Popup::Unite(u));
                }
            }
        });

        ui.add_space(6.0);

        // Curseur (dans l’unité active)
        let mut v = self.curseur;
        let resp = ui.add(
            egui::Slider::new(&mut v, CURSEUR_MIN..=CURSEUR_MAX)
                .suffix(format!(" {}", self.unite.symbole()))
                .fixed_decimals(1),
        );
        if resp.changed() {
            self.set_curseur(v);
        }

        ui.add_space(6.0);

        if ui
            .add_sized([96.0, 30.0], egui::Button::new("Reset"))
            .on_hover_text("Efface l’entrée et revient en Celsius")
            .clicked()
        {
            self.reset_total();
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultats :");

        // Vide / invalide : repères de la glace fondante, en grisé
        let (r, placeholder) = match self.resultats {
            Some(r) => (r, false),
            None => (convertir(0.0, Unite::Celsius), true),
        };

        if !r.est_valide() {
            ui.colored_label(
                ui.visuals().error_fg_color,
                "Température sous le zéro absolu : aucune valeur physique.",
            );
        }

        egui::Grid::new("grille_resultats")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for u in Unite::TOUTES {
                    let nom = egui::RichText::new(u.to_string());
                    ui.label(if u == self.unite { nom.strong() } else { nom });
                    Self::cellule(ui, &r, u, placeholder);
                    ui.end_row();
                }
            });
    }

    fn cellule(ui: &mut egui::Ui, r: &Conversion, u: Unite, placeholder: bool) {
        let v = r.get(u);
        let texte = egui::RichText::new(format_avec_symbole(&v, u, DECIMALES)).monospace();

        if v.est_echec() {
            ui.colored_label(ui.visuals().error_fg_color, texte);
        } else if placeholder {
            ui.label(texte.weak());
        } else {
            ui.label(texte.strong());
        }
    }

    fn ui_table(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Table de plage")
            .default_open(false)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("De");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.plage_debut)
                            .desired_width(72.0)
                            .id_salt("plage_debut"),
                    );
                    ui.label("à");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.plage_fin)
                            .desired_width(72.0)
                            .id_salt("plage_fin"),
                    );
                    ui.label("°C");

                    if ui.button("Générer").clicked() {
                        self.generer_table();
                    }
                });

                if !self.erreur_plage.is_empty() {
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur_plage);
                    return;
                }
                if self.table.is_empty() {
                    ui.weak("Aucune ligne (fin < début, ou table pas encore générée).");
                    return;
                }

                ui.add_space(6.0);
                egui::Grid::new("grille_plage")
                    .num_columns(Unite::TOUTES.len())
                    .striped(true)
                    .spacing([18.0, 4.0])
                    .show(ui, |ui| {
                        for u in Unite::TOUTES {
                            ui.strong(u.symbole());
                        }
                        ui.end_row();

                        for ligne in &self.table {
                            for u in Unite::TOUTES {
                                let v = ligne.get(u);
                                let texte = format_valeur(&v, DECIMALES);
                                if v.est_echec() {
                                    ui.colored_label(ui.visuals().error_fg_color, texte);
                                } else {
                                    ui.monospace(texte);
                                }
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    fn ui_fait(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Le saviez-vous ?")
            .default_open(true)
            .show(ui, |ui| {
                ui.label(self.fait_courant());
                if ui.button("Fait suivant").clicked() {
                    self.fait_suivant();
                }
            });
    }

    /* ------------------------ Popups ------------------------ */

    /// Fenêtres d’information : à appeler après le panneau central.
    pub fn ui_popups(&mut self, ctx: &egui::Context) {
        let Some(popup) = self.popup else {
            return;
        };

        let titre = match popup {
            Popup::Unite(u) => fiche(u).titre,
            Popup::APropos => "À propos",
        };

        let mut ouvert = true;
        egui::Window::new(titre)
            .open(&mut ouvert)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| match popup {
                Popup::Unite(u) => Self::ui_fiche(ui, u),
                Popup::APropos => Self::ui_a_propos(ui),
            });

        if !ouvert {
            self.fermer_popup();
        }
    }

    fn ui_fiche(ui: &mut egui::Ui, u: Unite) {
        ui.set_max_width(360.0);
        ui.label(fiche(u).texte);
        ui.add_space(6.0);

        egui::Grid::new(("reperes", u.symbole()))
            .num_columns(2)
            .spacing([18.0, 4.0])
            .show(ui, |ui| {
                for (nom, c) in REPERES_C {
                    ui.label(nom);
                    let v = convertir(c, Unite::Celsius).get(u);
                    ui.monospace(format_avec_symbole(&v, u, DECIMALES));
                    ui.end_row();
                }
            });
    }

    fn ui_a_propos(ui: &mut egui::Ui) {
        ui.set_max_width(360.0);
        ui.label(
            "Saisissez une température et son unité : les quatre échelles sont \
             recalculées à chaque frappe. En dessous du zéro absolu (0 K), aucune \
             valeur n’est affichée.",
        );
        ui.add_space(4.0);
        ui.label(
            "La table de plage échantillonne l’intervalle en une dizaine de lignes ; \
             seules les lignes sous le zéro absolu sont marquées.",
        );
        ui.add_space(4.0);
        ui.weak(format!("Version {}", env!("CARGO_PKG_VERSION")));
    }
}
