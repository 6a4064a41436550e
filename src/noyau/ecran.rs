//! Écran : tampon d’entrée (machine à états vide / en saisie).
//!
//! Contrats :
//! - jamais deux opérateurs binaires consécutifs dans l’affichage
//! - AC remet l’affichage à vide, sans condition
//! - "=" remplace tout l’affichage par le résultat (ou le marqueur d’erreur)
//! - après une erreur, la touche suivante repart d’un écran vide (effacement implicite)

use tracing::debug;

use super::bouton::{Bouton, Role, SYMBOLES_OPERATEURS};
use super::eval::{evaluer_affichage, MARQUEUR_ERREUR};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ecran {
    affichage: String,
    en_erreur: bool,
}

impl Ecran {
    /// Texte courant, lu par la vue après chaque appui.
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn effacer(&mut self) {
        self.affichage.clear();
        self.en_erreur = false;
    }

    /// Applique un appui de bouton. Les appuis refusés sont ignorés en silence.
    pub fn appliquer(&mut self, bouton: Bouton) {
        if self.en_erreur && bouton.role() != Role::Egal {
            self.effacer();
        }

        match bouton.role() {
            Role::Effacer => self.effacer(),

            Role::OperateurBinaire => {
                // l’opérateur précédent est suivi de son espace : on l’ignore
                let dernier = self.affichage.trim_end_matches(' ').chars().last();
                if dernier.is_some_and(|c| SYMBOLES_OPERATEURS.contains(&c)) {
                    debug!(affichage = %self.affichage, bouton = bouton.libelle(), "opérateur consécutif ignoré");
                    return;
                }
                self.affichage.push(' ');
                self.affichage.push_str(bouton.libelle());
                self.affichage.push(' ');
            }

            Role::Egal => {
                let resultat = evaluer_affichage(&self.affichage);
                self.en_erreur = resultat == MARQUEUR_ERREUR;
                self.affichage = resultat;
            }

            // Chiffre, virgule, +/- et % : libellé collé tel quel.
            Role::Chiffre | Role::Virgule | Role::Signe | Role::Pourcent => {
                self.affichage.push_str(bouton.libelle());
            }
        }
    }
}
