// src/noyau/format.rs
//
// Affichage du résultat (règle figée) :
// - partie fractionnaire nulle -> entier, sans ".0" ; -0 s’affiche "0"
// - sinon -> `Display` de f64 : plus courte écriture qui relit la même valeur,
//   jamais de notation scientifique (le résultat reste ré-éditable au pavé)
// - inf / -inf / NaN -> tels que `Display` les écrit (relisibles par f64::from_str)

/// Formate un résultat numérique pour l’écran.
pub fn formater_resultat(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        // -0.0 + 0.0 == +0.0
        return format!("{}", v + 0.0);
    }
    format!("{v}")
}
