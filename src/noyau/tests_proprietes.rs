//! Tests de propriétés : pavé + évaluateur.
//!
//! - séquences de touches arbitraires (aucun panic, invariants de l’écran)
//! - expressions à deux opérandes : résultat relisible en f64 ou marqueur d’erreur

use proptest::prelude::*;

use super::bouton::{Bouton, Role, GRILLE, SYMBOLES_OPERATEURS};
use super::ecran::Ecran;
use super::eval::{evaluer, evaluer_affichage, MARQUEUR_ERREUR};

const OPERATEURS: [Bouton; 4] = [
    Bouton::Plus,
    Bouton::Moins,
    Bouton::Multiplier,
    Bouton::Diviser,
];

fn chiffre() -> impl Strategy<Value = Bouton> {
    (0u32..=9).prop_map(|d| Bouton::chiffre(d).unwrap_or(Bouton::Zero))
}

fn operateur() -> impl Strategy<Value = Bouton> {
    prop::sample::select(OPERATEURS.to_vec())
}

fn bouton() -> impl Strategy<Value = Bouton> {
    let tous: Vec<Bouton> = GRILLE.iter().flat_map(|l| l.iter().copied()).collect();
    prop::sample::select(tous)
}

fn nombre() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..100_000).prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
    ]
}

fn taper(touches: &[Bouton]) -> Ecran {
    let mut e = Ecran::default();
    for &b in touches {
        e.appliquer(b);
    }
    e
}

/// Deux opérateurs binaires séparés par le seul espace de remplissage.
fn contient_operateurs_consecutifs(affichage: &str) -> bool {
    let jetons: Vec<&str> = affichage.split(' ').filter(|j| !j.is_empty()).collect();
    let est_op = |j: &str| {
        let mut c = j.chars();
        matches!((c.next(), c.next()), (Some(x), None) if SYMBOLES_OPERATEURS.contains(&x))
    };
    jetons.windows(2).any(|w| est_op(w[0]) && est_op(w[1]))
}

#[test]
fn operateur_double_pour_chaque_paire() {
    for &a in &OPERATEURS {
        for &b in &OPERATEURS {
            let mut e = taper(&[Bouton::Sept, a]);
            let avant = e.affichage().to_string();
            e.appliquer(b);
            assert_eq!(e.affichage(), avant, "{a:?} puis {b:?}");
        }
    }
}

proptest! {
    #[test]
    fn chiffres_seuls_concatenes(touches in prop::collection::vec(chiffre(), 0..30)) {
        let e = taper(&touches);
        let attendu: String = touches.iter().map(|b| b.libelle()).collect();
        prop_assert_eq!(e.affichage(), attendu.as_str());
    }

    #[test]
    fn operateur_apres_operateur_sans_effet(
        prefixe in prop::collection::vec(bouton(), 0..20),
        a in operateur(),
        b in operateur(),
    ) {
        let mut e = taper(&prefixe);
        e.appliquer(a);
        let avant = e.affichage().to_string();
        e.appliquer(b);
        prop_assert_eq!(e.affichage(), avant.as_str());
    }

    #[test]
    fn jamais_deux_operateurs_consecutifs(touches in prop::collection::vec(bouton(), 0..40)) {
        let mut e = Ecran::default();
        for b in touches {
            e.appliquer(b);
            prop_assert!(!contient_operateurs_consecutifs(e.affichage()), "{:?}", e.affichage());
        }
    }

    #[test]
    fn ac_remet_a_vide(touches in prop::collection::vec(bouton(), 0..40)) {
        let mut e = taper(&touches);
        e.appliquer(Bouton::ToutEffacer);
        prop_assert_eq!(e.affichage(), "");
    }

    #[test]
    fn egal_donne_un_nombre_ou_le_marqueur(
        a in nombre(),
        op in operateur(),
        b in nombre(),
    ) {
        let expr = format!("{a} {} {b}", op.libelle());
        let r = evaluer_affichage(&expr);
        prop_assert!(
            r == MARQUEUR_ERREUR || r.parse::<f64>().is_ok(),
            "expr={:?} r={:?}", expr, r
        );
    }

    #[test]
    fn touches_arbitraires_puis_egal(touches in prop::collection::vec(bouton(), 0..30)) {
        let mut e = taper(&touches);
        e.appliquer(Bouton::Egal);
        let r = e.affichage();
        prop_assert!(r == MARQUEUR_ERREUR || r.parse::<f64>().is_ok(), "r={:?}", r);
    }

    #[test]
    fn addition_entiere_exacte(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let r = evaluer_affichage(&format!("{a} + {b}"));
        prop_assert_eq!(r, (u64::from(a) + u64::from(b)).to_string());
    }

    #[test]
    fn pourcent_egal_centieme(a in 0u32..10_000) {
        let avec = evaluer(&format!("{a} %")).map(|ev| ev.affichage);
        let sans = evaluer(&format!("{a} * 0.01")).map(|ev| ev.affichage);
        prop_assert_eq!(avec, sans);
    }

    #[test]
    fn texte_arbitraire_sans_panic(s in "[0-9 .+×÷%=AC/-]{0,24}") {
        let _ = evaluer(&s);
    }
}

#[test]
fn roles_couverts_par_la_grille() {
    let roles: Vec<Role> = GRILLE
        .iter()
        .flat_map(|l| l.iter().map(|b| b.role()))
        .collect();
    for r in [
        Role::Chiffre,
        Role::Virgule,
        Role::OperateurBinaire,
        Role::Egal,
        Role::Effacer,
        Role::Signe,
        Role::Pourcent,
    ] {
        assert!(roles.contains(&r), "{r:?}");
    }
}
