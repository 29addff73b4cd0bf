//! Noyau : évaluation (pipeline réel)
//!
//! texte brut -> prétraitement -> jetons -> shunting-yard (deux piles) -> f64
//!
//! Remarque : aucune étape ne modifie la mémoire. Ans / M / variables sont mis à jour
//! par l'appelant, et seulement après un succès.

use super::erreur::{ErreurCalcul, Resultat};
use super::evaluateur::evaluer_jetons;
use super::jetons::{format_tokens, tokenize};
use super::memoire::Memoire;
use super::pretraitement::pretraiter;
use super::reglages::Reglages;

/// Trace d'une évaluation (panneau "Démarche" de la vue).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub pretraite: String,
    pub jetons: String,
}

/// API publique : évalue une expression contre un instantané de la mémoire.
pub fn evaluer(expr: &str, memoire: &Memoire, reglages: &Reglages) -> Resultat<f64> {
    evaluer_avec_demarche(expr, memoire, reglages).map(|(v, _d)| v)
}

/// Comme `evaluer`, et retourne aussi la démarche (texte prétraité + jetons).
pub fn evaluer_avec_demarche(
    expr: &str,
    memoire: &Memoire,
    reglages: &Reglages,
) -> Resultat<(f64, Demarche)> {
    // garde-fou longueur (avant tout travail)
    if expr.chars().count() > reglages.taille_max {
        log::debug!("entrée trop longue (> {} caractères)", reglages.taille_max);
        return Err(ErreurCalcul::Syntax);
    }

    // 1) Prétraitement
    let pretraite = pretraiter(expr, memoire, reglages.substitution);

    // 2) Jetons
    let jetons = tokenize(&pretraite)?;
    let jetons_txt = format_tokens(&jetons);
    log::trace!("jetons : {jetons_txt}");

    // 3) Deux piles
    let resultat = evaluer_jetons(&jetons, memoire.angle_mode());
    match &resultat {
        Ok(v) => log::debug!("{expr:?} = {v}"),
        Err(e) => log::debug!("{expr:?} : {e}"),
    }

    let d = Demarche {
        pretraite,
        jetons: jetons_txt,
    };
    resultat.map(|v| (v, d))
}
