//! Calculatrice scientifique : noyau d'évaluation
//!
//! `noyau` : texte -> f64 (ou erreur typée). La vue eframe (binaire) n'est qu'une
//! couche mince au-dessus.

pub mod noyau;
