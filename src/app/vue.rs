// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran aligné à droite, grosse police
// - Pavé 5 lignes (GRILLE du noyau), "0" sur deux colonnes
// - Clavier : chiffres/opérateurs tapés, Enter = "="
// - Impulsion d’une seconde sur l’écran après "=" (cosmétique)
//
// La vue ne décide rien : elle transmet des Bouton et relit l’affichage.

use eframe::egui::{self, Color32, RichText};

use super::etat::AppCalc;
use crate::noyau::{Bouton, Categorie, GRILLE};

const ESPACEMENT: f32 = 12.0;
const TAILLE_ECRAN: f32 = 50.0;
const TAILLE_BOUTON: f32 = 30.0;

const ORANGE: Color32 = Color32::from_rgb(255, 149, 0);

fn couleur(categorie: Categorie) -> Color32 {
    match categorie {
        Categorie::Chiffre => Color32::from_rgb(64, 64, 64),
        Categorie::Operateur => ORANGE,
        Categorie::Fonction => Color32::from_rgb(140, 140, 140),
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let maintenant = ui.input(|i| i.time);

        self.ui_clavier(ui, maintenant);

        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(ESPACEMENT);

            // bottom_up : dernière ligne d’abord
            for ligne in GRILLE.iter().rev() {
                self.ui_ligne(ui, ligne, maintenant);
            }

            ui.add_space(ESPACEMENT);
            self.ui_ecran(ui, maintenant);
        });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let impulsion = self.impulsion(maintenant);

        // grossit puis revient : pic à mi-parcours
        let (echelle, teinte) = match impulsion {
            Some(p) => {
                ui.ctx().request_repaint();
                let bosse = 1.0 - (2.0 * p - 1.0).abs();
                (1.0 + 0.10 * bosse, ORANGE.gamma_multiply(0.6 + 0.4 * bosse))
            }
            None => (1.0, Color32::WHITE),
        };

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(ESPACEMENT);
            ui.label(
                RichText::new(self.affichage())
                    .size(TAILLE_ECRAN * echelle)
                    .strong()
                    .color(teinte),
            );
        });
    }

    fn ui_ligne(&mut self, ui: &mut egui::Ui, ligne: &[Bouton], maintenant: f64) {
        let cote = ((ui.available_width() - 5.0 * ESPACEMENT) / 4.0).max(40.0);

        ui.horizontal(|ui| {
            ui.add_space(ESPACEMENT);
            for &bouton in ligne {
                let largeur = if bouton == Bouton::Zero {
                    2.0 * cote + ESPACEMENT
                } else {
                    cote
                };

                let resp = ui.add_sized(
                    [largeur, cote],
                    egui::Button::new(
                        RichText::new(bouton.libelle())
                            .size(TAILLE_BOUTON)
                            .color(Color32::WHITE),
                    )
                    .fill(couleur(bouton.categorie())),
                );

                if resp.clicked() {
                    self.appuyer(bouton, maintenant);
                }
            }
        });
    }

    /// Clavier physique : caractères tapés + Enter.
    fn ui_clavier(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let boutons: Vec<Bouton> = ui.input(|i| {
            i.events
                .iter()
                .flat_map(|ev| match ev {
                    egui::Event::Text(t) => t.chars().filter_map(Bouton::depuis_touche).collect(),
                    egui::Event::Key {
                        key: egui::Key::Enter,
                        pressed: true,
                        ..
                    } => vec![Bouton::Egal],
                    _ => Vec::new(),
                })
                .collect()
        });

        for b in boutons {
            self.appuyer(b, maintenant);
        }
    }
}
