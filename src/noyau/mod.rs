//! Noyau de la calculatrice (pavé numérique)
//!
//! Organisation interne :
//! - bouton.rs  : boutons du pavé (libellé, rôle, catégorie) + grille
//! - ecran.rs   : tampon d’entrée (machine à états)
//! - jetons.rs  : normalisation + tokenisation
//! - rpn.rs     : shunting-yard + évaluation f64
//! - format.rs  : affichage du résultat
//! - eval.rs    : pipeline complet
//! - erreur.rs  : erreurs d’évaluation

pub mod bouton;
pub mod ecran;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use bouton::{Bouton, Categorie, GRILLE};
pub use ecran::Ecran;
