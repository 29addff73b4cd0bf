// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// Une variante par cause. Les messages sont courts : la vue les affiche tels quels.
//
// NOTE: un résultat NaN / ±∞ n'est PAS une erreur (sqrt(-1), asin(2), 10^999...).

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Nombre d'opérandes final ≠ 1, ou opérandes manquants pour un opérateur / une fonction.
    #[error("Erreur de syntaxe")]
    Syntax,

    /// Dépilement sur une pile vide alors que le protocole garantit le contraire.
    #[error("Pile vide")]
    StackUnderflow,

    #[error("Parenthèses non appariées")]
    MismatchedParentheses,

    #[error("Division par zéro")]
    DivisionByZero,

    #[error("Fonction inconnue : {0}")]
    UnknownFunction(String),

    /// Seulement via `store` : le nom n'est pas une des huit cases A..F, X, M.
    #[error("Variable inconnue : {0}")]
    UnknownVariable(String),
}

pub type Resultat<T> = Result<T, ErreurCalcul>;
