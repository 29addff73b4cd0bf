// src/noyau/format.rs
//
// Texte d'affichage d'un résultat (c'est aussi ce texte qui devient Ans).

/// Bornes où un f64 entier s'écrit sans perte comme i64.
const I64_BORNE: f64 = i64::MAX as f64;

/// - entier (dans la plage i64) : sans ".0"  (12.0 -> "12")
/// - autre fini : écriture décimale la plus courte (0.1 -> "0.1")
/// - NaN / ±∞ : "NaN", "inf", "-inf" (relus par `tokenize`)
pub fn formater_resultat(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < I64_BORNE {
        // -0.0 s'affiche "0"
        return format!("{}", v as i64);
    }
    format!("{v}")
}
