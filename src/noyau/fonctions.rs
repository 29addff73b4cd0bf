// src/noyau/fonctions.rs
//
// Table des fonctions unaires
// ---------------------------
// - sin/cos/tan : argument converti degrés -> radians en mode DEG
// - asin/acos/atan : résultat converti radians -> degrés en mode DEG
// - hyperboliques (+ inverses) : jamais touchées par le mode
//
// Hors domaine (sqrt(-1), asin(2), log(0)...) => NaN / ±∞, pas d'erreur.

use std::str::FromStr;

use super::erreur::ErreurCalcul;
use super::memoire::ModeAngle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Sqrt,
    Log,
    Ln,
}

impl Fonction {
    pub const TOUTES: [Fonction; 15] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Asin,
        Fonction::Acos,
        Fonction::Atan,
        Fonction::Sinh,
        Fonction::Cosh,
        Fonction::Tanh,
        Fonction::Asinh,
        Fonction::Acosh,
        Fonction::Atanh,
        Fonction::Sqrt,
        Fonction::Log,
        Fonction::Ln,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Sinh => "sinh",
            Fonction::Cosh => "cosh",
            Fonction::Tanh => "tanh",
            Fonction::Asinh => "asinh",
            Fonction::Acosh => "acosh",
            Fonction::Atanh => "atanh",
            Fonction::Sqrt => "sqrt",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
        }
    }

    fn est_angulaire(self) -> bool {
        matches!(self, Fonction::Sin | Fonction::Cos | Fonction::Tan)
    }

    fn est_angulaire_inverse(self) -> bool {
        matches!(self, Fonction::Asin | Fonction::Acos | Fonction::Atan)
    }

    /// Calcule f(x) en tenant compte du mode d'angle.
    pub fn appliquer(self, x: f64, mode: ModeAngle) -> f64 {
        let degres = mode == ModeAngle::Degres;
        let x = if degres && self.est_angulaire() {
            x.to_radians()
        } else {
            x
        };

        let y = match self {
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Asin => x.asin(),
            Fonction::Acos => x.acos(),
            Fonction::Atan => x.atan(),
            Fonction::Sinh => x.sinh(),
            Fonction::Cosh => x.cosh(),
            Fonction::Tanh => x.tanh(),
            // formes logarithmiques (mêmes bords que la calculatrice d'origine)
            Fonction::Asinh => (x + (x * x + 1.0).sqrt()).ln(),
            Fonction::Acosh => (x + (x * x - 1.0).sqrt()).ln(),
            Fonction::Atanh => 0.5 * ((1.0 + x) / (1.0 - x)).ln(),
            Fonction::Sqrt => x.sqrt(),
            Fonction::Log => x.log10(),
            Fonction::Ln => x.ln(),
        };

        if degres && self.est_angulaire_inverse() {
            y.to_degrees()
        } else {
            y
        }
    }
}

impl FromStr for Fonction {
    type Err = ErreurCalcul;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fonction::TOUTES
            .into_iter()
            .find(|f| f.nom() == s)
            .ok_or_else(|| ErreurCalcul::UnknownFunction(s.to_string()))
    }
}

/// Identificateurs reconnus comme fonctions (sensible à la casse).
pub fn est_fonction(name: &str) -> bool {
    name.parse::<Fonction>().is_ok()
}
