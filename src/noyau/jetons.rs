// src/noyau/jetons.rs
//
// Normalisation textuelle + tokenisation.
//
// Étapes (dans l’ordre du pipeline) :
// 1) normaliser     : × -> *, ÷ -> /, % -> *0.01 (substitution brute, pas positionnelle)
// 2) canonicaliser  : découpe sur ' ', entier "12" -> "12.0", puis recolle avec ' '
// 3) tokenize       : lecture caractère par caractère (un fragment "*0.01" n’a pas d’espace)

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire : jamais produit par tokenize, seulement par to_rpn.
    Neg,
}

/// Fragment substitué à chaque `%`.
const FRAGMENT_POURCENT: &str = "*0.01";

/// Remplace les glyphes de l’écran par les opérateurs canoniques.
pub fn normaliser(affichage: &str) -> String {
    affichage
        .replace('×', "*")
        .replace('÷', "/")
        .replace('%', FRAGMENT_POURCENT)
}

/// Un numéral entier : uniquement des chiffres ASCII, au moins un.
fn est_entier(jeton: &str) -> bool {
    !jeton.is_empty() && jeton.bytes().all(|b| b.is_ascii_digit())
}

/// Forme canonique : chaque entier isolé reçoit un suffixe ".0".
/// Les nombres déjà décimaux et les opérateurs passent tels quels.
pub fn canonicaliser(normalise: &str) -> String {
    normalise
        .split(' ')
        .map(|j| {
            if est_entier(j) {
                format!("{j}.0")
            } else {
                j.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tokenize une expression canonique.
/// Supporte:
/// - nombres décimaux (12, 12.5, .5, 5.) avec au plus un point
/// - opérateurs + - * /
/// - espaces ignorés
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let op = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = op {
            out.push(t);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();

            let points = texte.matches('.').count();
            let a_chiffre = texte.bytes().any(|b| b.is_ascii_digit());
            if points > 1 || !a_chiffre {
                return Err(ErreurEval::NombreInvalide(texte));
            }

            let v = texte
                .parse::<f64>()
                .map_err(|_| ErreurEval::NombreInvalide(texte.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (démarche / journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format!("{v:?}"),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
