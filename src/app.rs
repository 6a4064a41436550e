// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

/// Fond quasi noir derrière l’écran et le pavé.
const FOND: egui::Color32 = egui::Color32::from_rgb(15, 15, 15);

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = AC. Enter et les touches du pavé sont gérés dans vue.rs.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.tout_effacer();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(FOND))
            .show(ctx, |ui| {
                self.ui(ui);
            });
    }
}
