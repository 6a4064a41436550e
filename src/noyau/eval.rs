//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> canonicaliser -> jetons -> RPN -> f64 -> affichage
//!
//! Pur : aucune lecture/écriture d’état, l’écran dépose lui-même le résultat.

use tracing::{debug, warn};

use super::erreur::ErreurEval;
use super::format::formater_resultat;
use super::jetons::{canonicaliser, format_tokens, normaliser, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Texte affiché à la place de l’expression quand l’évaluation échoue.
pub const MARQUEUR_ERREUR: &str = "Erro";

/// Trace des étapes intermédiaires (journal de debug).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub canonique: String,
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub affichage: String,
    pub demarche: Demarche,
}

/// API publique : évalue le texte de l’écran.
pub fn evaluer(expr_str: &str) -> Result<Evaluation, ErreurEval> {
    if expr_str.trim().is_empty() {
        return Err(ErreurEval::Vide);
    }

    // 1) Glyphes + pourcent, puis entiers -> flottants
    let canonique = canonicaliser(&normaliser(expr_str));

    // 2) Jetons
    let jetons = tokenize(&canonique)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;

    // 4) Valeur
    let valeur = eval_rpn(&rpn)?;

    let demarche = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        canonique,
    };

    Ok(Evaluation {
        valeur,
        affichage: formater_resultat(valeur),
        demarche,
    })
}

/// Comme `evaluer`, mais toute erreur devient le marqueur d’erreur.
pub fn evaluer_affichage(expr_str: &str) -> String {
    match evaluer(expr_str) {
        Ok(ev) => {
            debug!(
                canonique = %ev.demarche.canonique,
                jetons = %ev.demarche.jetons,
                rpn = %ev.demarche.rpn,
                valeur = ev.valeur,
                "évaluation"
            );
            ev.affichage
        }
        Err(e) => {
            warn!(expression = expr_str, erreur = %e, "évaluation impossible");
            MARQUEUR_ERREUR.to_string()
        }
    }
}
