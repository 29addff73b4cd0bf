// src/noyau/moteur.rs
//
// Moteur : mémoire + réglages, possédés par l'appelant
// ----------------------------------------------------
// Plusieurs moteurs indépendants peuvent coexister (pas d'état global).
// Pas prévu pour un accès concurrent : l'appelant ajoute son propre verrou si besoin.

use super::erreur::Resultat;
use super::eval::{evaluer, evaluer_avec_demarche, Demarche};
use super::memoire::{Memoire, ModeAngle};
use super::reglages::Reglages;

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    memoire: Memoire,
    reglages: Reglages,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_reglages(reglages: Reglages) -> Self {
        let memoire = Memoire::new(reglages.mode_angle, reglages.derniere_reponse.clone());
        Self { memoire, reglages }
    }

    /// Réglages donnés à la création. Le mode d'angle et Ans courants se lisent
    /// via `angle_mode()` / `last_answer()`.
    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    pub fn memoire(&self) -> &Memoire {
        &self.memoire
    }

    /// Seul point d'entrée de calcul. Ne modifie rien.
    pub fn evaluate(&self, expression: &str) -> Resultat<f64> {
        evaluer(expression, &self.memoire, &self.reglages)
    }

    pub fn evaluate_avec_demarche(&self, expression: &str) -> Resultat<(f64, Demarche)> {
        evaluer_avec_demarche(expression, &self.memoire, &self.reglages)
    }

    pub fn store(&mut self, name: &str, value: f64) -> Resultat<()> {
        self.memoire.store(name, value)
    }

    pub fn angle_mode(&self) -> ModeAngle {
        self.memoire.angle_mode()
    }

    pub fn set_angle_mode(&mut self, mode: ModeAngle) {
        self.memoire.set_angle_mode(mode);
    }

    pub fn last_answer(&self) -> &str {
        self.memoire.last_answer()
    }

    pub fn set_last_answer(&mut self, text: impl Into<String>) {
        self.memoire.set_last_answer(text);
    }

    pub fn memory(&self) -> f64 {
        self.memoire.memory()
    }

    pub fn set_memory(&mut self, value: f64) {
        self.memoire.set_memory(value);
    }

    pub fn memory_add(&mut self, value: f64) -> f64 {
        self.memoire.memory_add(value)
    }
}
