//! src/app/etat.rs
//!
//! État UI (sans vue) : possède l’unique `Ecran` du noyau.
//!
//! Flux à sens unique :
//! - la vue envoie les appuis via `appuyer`
//! - la vue relit `affichage()` à chaque frame
//!
//! L’impulsion visuelle après "=" n’est qu’une échéance (temps egui) :
//! elle ne touche jamais l’écran.

use crate::noyau::{Bouton, Ecran};

/// Durée de l’impulsion visuelle déclenchée par "=" (secondes).
pub const DUREE_IMPULSION: f64 = 1.0;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    ecran: Ecran,

    // fin de l’impulsion, en temps egui (secondes depuis le lancement)
    impulsion_fin: Option<f64>,
}

impl AppCalc {
    /// Appui d’un bouton. `maintenant` = horloge de la vue (sert à l’impulsion).
    pub fn appuyer(&mut self, bouton: Bouton, maintenant: f64) {
        self.ecran.appliquer(bouton);

        if bouton == Bouton::Egal {
            self.impulsion_fin = Some(maintenant + DUREE_IMPULSION);
        }
    }

    pub fn affichage(&self) -> &str {
        self.ecran.affichage()
    }

    /// AC (raccourci clavier Échap).
    pub fn tout_effacer(&mut self) {
        self.ecran.appliquer(Bouton::ToutEffacer);
    }

    /// Progression de l’impulsion dans [0, 1), ou None si inactive.
    pub fn impulsion(&mut self, maintenant: f64) -> Option<f32> {
        let fin = self.impulsion_fin?;
        if maintenant >= fin {
            self.impulsion_fin = None;
            return None;
        }
        let debut = fin - DUREE_IMPULSION;
        Some(((maintenant - debut) / DUREE_IMPULSION).clamp(0.0, 1.0) as f32)
    }
}
