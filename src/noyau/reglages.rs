//! Réglages du moteur (valeurs de départ + politique de substitution).

use super::memoire::ModeAngle;

/// Garde-fou : longueur max d'une entrée (anti-abus / anti-gel).
pub const TAILLE_MAX_DEFAUT: usize = 4096;

/// Politique de remplacement des variables / constantes dans le texte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Substitution {
    /// Remplace seulement des mots entiers : `Ans`, ou un mot fait uniquement de
    /// lettres réservées / `e` / `π`. Les noms de fonctions ne sont jamais touchés.
    #[default]
    ParJetons,

    /// Remplacement naïf sur tout le texte, lettre par lettre (compatibilité).
    /// Exemple connu : `Ans` est abîmé par le remplacement de `A` fait avant.
    Litterale,
}

/// Réglages du moteur.
///
/// `mode_angle` et `derniere_reponse` ne servent qu'au démarrage : ensuite la
/// `Memoire` fait foi (`Moteur::angle_mode`, `Moteur::last_answer`).
#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    /// Mode d'angle initial.
    pub mode_angle: ModeAngle,
    pub substitution: Substitution,
    /// Ans initial.
    pub derniere_reponse: String,
    pub taille_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            mode_angle: ModeAngle::Degres,
            substitution: Substitution::ParJetons,
            derniere_reponse: "0".to_string(),
            taille_max: TAILLE_MAX_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn with_mode_angle(mut self, mode: ModeAngle) -> Self {
        self.mode_angle = mode;
        self
    }

    pub fn with_substitution(mut self, substitution: Substitution) -> Self {
        self.substitution = substitution;
        self
    }

    pub fn with_derniere_reponse(mut self, text: impl Into<String>) -> Self {
        self.derniere_reponse = text.into();
        self
    }

    pub fn with_taille_max(mut self, taille_max: usize) -> Self {
        self.taille_max = taille_max;
        self
    }
}
