// src/noyau/memoire.rs
//
// Mémoire du moteur : variables, Ans, mode d'angle
// ------------------------------------------------
// - Huit cases réservées : A B C D E F X M (0.0 au départ)
// - M sert aussi d'accumulateur (touche M+)
// - Ans est un TEXTE (l'instantané affiché), pas un f64
//
// Contrat : l'évaluation ne modifie jamais la mémoire. C'est l'appelant qui décide
// quand un résultat devient Ans ou part dans une case.

use std::fmt;
use std::str::FromStr;

use num_traits::FloatConst;

use super::erreur::{ErreurCalcul, Resultat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variable {
    A,
    B,
    C,
    D,
    E,
    F,
    X,
    M,
}

impl Variable {
    /// Ordre de substitution (celui de la calculatrice d'origine).
    pub const TOUTES: [Variable; 8] = [
        Variable::A,
        Variable::B,
        Variable::C,
        Variable::D,
        Variable::E,
        Variable::F,
        Variable::X,
        Variable::M,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn lettre(self) -> char {
        match self {
            Variable::A => 'A',
            Variable::B => 'B',
            Variable::C => 'C',
            Variable::D => 'D',
            Variable::E => 'E',
            Variable::F => 'F',
            Variable::X => 'X',
            Variable::M => 'M',
        }
    }
}

impl TryFrom<char> for Variable {
    type Error = ErreurCalcul;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Variable::TOUTES
            .into_iter()
            .find(|v| v.lettre() == c)
            .ok_or_else(|| ErreurCalcul::UnknownVariable(c.to_string()))
    }
}

impl FromStr for Variable {
    type Err = ErreurCalcul;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut it = s.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Variable::try_from(c),
            _ => Err(ErreurCalcul::UnknownVariable(s.to_string())),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lettre())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    /// Touche MODE : DEG <-> RAD.
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    pub fn indicateur(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }
}

/// Constantes reconnues dans le texte (π et e).
pub fn constante(c: char) -> Option<f64> {
    match c {
        'π' => Some(<f64 as FloatConst>::PI()),
        'e' => Some(<f64 as FloatConst>::E()),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Memoire {
    cases: [f64; 8],
    derniere_reponse: String,
    mode_angle: ModeAngle,
}

impl Default for Memoire {
    fn default() -> Self {
        Self {
            cases: [0.0; 8],
            derniere_reponse: "0".to_string(),
            mode_angle: ModeAngle::default(),
        }
    }
}

impl Memoire {
    pub fn new(mode_angle: ModeAngle, derniere_reponse: impl Into<String>) -> Self {
        Self {
            cases: [0.0; 8],
            derniere_reponse: derniere_reponse.into(),
            mode_angle,
        }
    }

    /// STO : écrit dans la case `name`. Un nom hors des huit cases est refusé (jamais ignoré).
    pub fn store(&mut self, name: &str, value: f64) -> Resultat<()> {
        match name.parse::<Variable>() {
            Ok(v) => {
                self.ecrire(v, value);
                Ok(())
            }
            Err(e) => {
                log::warn!("STO refusé : {name:?} n'est pas une variable");
                Err(e)
            }
        }
    }

    pub fn ecrire(&mut self, v: Variable, value: f64) {
        self.cases[v.index()] = value;
    }

    pub fn valeur(&self, v: Variable) -> f64 {
        self.cases[v.index()]
    }

    pub fn angle_mode(&self) -> ModeAngle {
        self.mode_angle
    }

    pub fn set_angle_mode(&mut self, mode: ModeAngle) {
        self.mode_angle = mode;
    }

    pub fn last_answer(&self) -> &str {
        &self.derniere_reponse
    }

    pub fn set_last_answer(&mut self, text: impl Into<String>) {
        self.derniere_reponse = text.into();
    }

    pub fn memory(&self) -> f64 {
        self.valeur(Variable::M)
    }

    pub fn set_memory(&mut self, value: f64) {
        self.ecrire(Variable::M, value);
    }

    /// M+ : M = M + value. Retourne la nouvelle valeur.
    pub fn memory_add(&mut self, value: f64) -> f64 {
        let m = self.memory() + value;
        self.set_memory(m);
        m
    }
}
