// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
//
// Règles:
// - précédence : * / au-dessus de + -, associativité gauche partout
// - moins unaire (quand on n’attend PAS d’opérateur) : Tok::Neg, plus fort que * /
// - plus unaire : ignoré
// - pas de parenthèses
// - arithmétique IEEE-754 : 1/0 = inf, 0/0 = NaN (pas d’erreur dédiée)

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Num(_) => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // Sert à distinguer moins unaire / binaire, et deux nombres collés.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurEval::OperandeEnTrop);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // unaire : '-' devient Neg (préfixe, pas de dépilement), '+' disparaît
                if tok == Tok::Minus {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Star | Tok::Slash if !prev_was_value => {
                return Err(ErreurEval::OperandeManquant);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                while let Some(top) = ops.last() {
                    if precedence(top) >= precedence(&tok) {
                        out.extend(ops.pop());
                    } else {
                        break;
                    }
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => ops.push(tok),
        }
    }

    // opérateur final sans opérande : "5 +"
    if !tokens.is_empty() && !prev_was_value {
        return Err(ErreurEval::OperandeManquant);
    }

    while let Some(op) = ops.pop() {
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de f64.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::Neg => {
                let a = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                st.push(-a);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                let a = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => a / b,
                };
                st.push(v);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        [] => Err(ErreurEval::OperandeManquant),
        _ => Err(ErreurEval::OperandeEnTrop),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::tokenize;

    fn calc(s: &str) -> Result<f64, ErreurEval> {
        let t = tokenize(s)?;
        eval_rpn(&to_rpn(&t)?)
    }

    #[test]
    fn precedence_mul_avant_add() {
        assert_eq!(calc("2 + 3 * 4"), Ok(14.0));
        assert_eq!(calc("2 * 3 + 4"), Ok(10.0));
    }

    #[test]
    fn associativite_gauche() {
        assert_eq!(calc("10 - 4 - 3"), Ok(3.0));
        assert_eq!(calc("64 / 4 / 2"), Ok(8.0));
        assert_eq!(calc("8 / 2 * 4"), Ok(16.0));
    }

    #[test]
    fn moins_unaire() {
        assert_eq!(calc("- 5"), Ok(-5.0));
        assert_eq!(calc("2 * - 3"), Ok(-6.0));
        assert_eq!(calc("- 2 * 3 + 1"), Ok(-5.0));
        assert_eq!(calc("+ 4"), Ok(4.0));
    }

    #[test]
    fn rpn_ordre() {
        let t = tokenize("2 + 3 * 4").unwrap();
        let r = to_rpn(&t).unwrap();
        assert_eq!(
            r,
            vec![Tok::Num(2.0), Tok::Num(3.0), Tok::Num(4.0), Tok::Star, Tok::Plus]
        );
    }

    #[test]
    fn division_par_zero_ieee() {
        assert_eq!(calc("1 / 0"), Ok(f64::INFINITY));
        assert!(calc("0 / 0").unwrap().is_nan());
    }

    #[test]
    fn structures_invalides() {
        assert_eq!(calc("5 +"), Err(ErreurEval::OperandeManquant));
        assert_eq!(calc("* 5"), Err(ErreurEval::OperandeManquant));
        assert_eq!(calc("5 * / 2"), Err(ErreurEval::OperandeManquant));
        assert_eq!(calc("5 5"), Err(ErreurEval::OperandeEnTrop));
        assert_eq!(calc("12+/-3"), Err(ErreurEval::OperandeManquant));
    }
}
