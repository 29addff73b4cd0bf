//! Noyau flottant de la calculatrice scientifique
//!
//! Organisation interne :
//! - memoire.rs       : variables A..F X M, Ans (texte), mode DEG/RAD
//! - reglages.rs      : valeurs de départ + politique de substitution
//! - pretraitement.rs : substitution, √ -> sqrt, multiplication implicite
//! - jetons.rs        : tokenisation
//! - evaluateur.rs    : shunting-yard à deux piles
//! - fonctions.rs     : table sin/cos/.../ln
//! - eval.rs          : pipeline complet
//! - moteur.rs        : façade (mémoire + réglages)
//! - format.rs        : texte d'affichage d'un résultat
//! - erreur.rs        : erreurs typées

pub mod erreur;
pub mod eval;
pub mod evaluateur;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod memoire;
pub mod moteur;
pub mod pretraitement;
pub mod reglages;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalcul, Resultat};
pub use eval::{evaluer, evaluer_avec_demarche, Demarche};
pub use format::formater_resultat;
pub use memoire::{Memoire, ModeAngle, Variable};
pub use moteur::Moteur;
pub use reglages::{Reglages, Substitution};
