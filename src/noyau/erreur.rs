// src/noyau/erreur.rs

use thiserror::Error;

/// Échecs structurels de l’évaluation. L’écran les réduit tous au marqueur d’erreur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("expression vide")]
    Vide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("opérande manquant")]
    OperandeManquant,

    #[error("opérande en trop (deux nombres sans opérateur)")]
    OperandeEnTrop,
}
