//! src/app/etat.rs
//!
//! État UI + traitement des touches (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, historique, bascules
//! SHIFT/ALPHA/HYP/STO/RCL, erreur, démarche) et traduire chaque touche en texte
//! ou en appel au moteur.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `Moteur`.
//! - Ans n’est mis à jour qu’après un "=" réussi, avec le texte affiché.
//! - Testable sans fenêtre : `appuyer(Touche)` est une pure machine à états.

use calculatrice_sci::noyau::{formater_resultat, Demarche, Moteur, Variable};

/// Texte d’un affichage “vide”.
const AFFICHAGE_ZERO: &str = "0";

/// Touches du clavier de la calculatrice (une par bouton).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Shift,
    Alpha,
    Mode,
    On,
    Carre,
    Cube,
    PuissanceY,
    Inverse,
    Racine,
    Sin,
    Cos,
    Tan,
    Hyp,
    Log,
    Ln,
    ParG,
    ParD,
    Negatif,
    Rcl,
    Chiffre(char),
    Point,
    Del,
    Ac,
    Fois,
    Divise,
    Plus,
    Moins,
    Exp10,
    Ans,
    MPlus,
    Egal,
}

impl Touche {
    /// Libellé du bouton. Latin-1 seulement : les polices par défaut d'egui
    /// n'ont pas les exposants Unicode (ʸ, ⁻¹, ˣ).
    pub fn libelle(self) -> String {
        let s = match self {
            Touche::Shift => "SHIFT",
            Touche::Alpha => "ALPHA",
            Touche::Mode => "MODE",
            Touche::On => "ON",
            Touche::Carre => "x²",
            Touche::Cube => "x³",
            Touche::PuissanceY => "x^y",
            Touche::Inverse => "x^-1",
            Touche::Racine => "sqrt",
            Touche::Sin => "sin",
            Touche::Cos => "cos",
            Touche::Tan => "tan",
            Touche::Hyp => "hyp",
            Touche::Log => "log",
            Touche::Ln => "ln",
            Touche::ParG => "(",
            Touche::ParD => ")",
            Touche::Negatif => "(-)",
            Touche::Rcl => "RCL",
            Touche::Chiffre(c) => return c.to_string(),
            Touche::Point => ".",
            Touche::Del => "DEL",
            Touche::Ac => "AC",
            Touche::Fois => "×",
            Touche::Divise => "÷",
            Touche::Plus => "+",
            Touche::Moins => "-",
            Touche::Exp10 => "×10^x",
            Touche::Ans => "Ans",
            Touche::MPlus => "M+",
            Touche::Egal => "=",
        };
        s.to_string()
    }

    /// En mode STO / RCL / ALPHA, certaines touches désignent une variable.
    fn variable(self) -> Option<Variable> {
        match self {
            Touche::Negatif => Some(Variable::A),
            Touche::Hyp => Some(Variable::B),
            Touche::Sin => Some(Variable::C),
            Touche::Cos => Some(Variable::D),
            Touche::Tan => Some(Variable::E),
            Touche::Rcl => Some(Variable::F),
            Touche::ParD => Some(Variable::X),
            Touche::MPlus => Some(Variable::M),
            _ => None,
        }
    }
}

/// Bascules des touches modificatrices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bascules {
    pub shift: bool,
    pub alpha: bool,
    pub hyp: bool,
    pub sto: bool,
    pub rcl: bool,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- moteur (mémoire + réglages) ---
    pub moteur: Moteur,

    // --- entrée / sorties ---
    pub affichage: String,
    pub historique: String,
    pub erreur: String, // message d’erreur (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    pub bascules: Bascules,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(),
            affichage: AFFICHAGE_ZERO.to_string(),
            historique: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            bascules: Bascules::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions simples ------------------------ */

    /// AC / ON : remise à zéro de l’affichage et de l’historique (la mémoire reste).
    pub fn reset_affichage(&mut self) {
        self.affichage = AFFICHAGE_ZERO.to_string();
        self.historique.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEL : retire un caractère, sans descendre sous "0".
    pub fn backspace(&mut self) {
        if self.affichage.chars().count() > 1 && self.affichage != AFFICHAGE_ZERO {
            self.affichage.pop();
        } else {
            self.affichage = AFFICHAGE_ZERO.to_string();
        }
    }

    /// Utilitaire : placer une erreur (on CONSERVE l’affichage pour corriger la faute).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Indicateur d’état : "SHIFT ALPHA STO RCL HYP DEG".
    pub fn indicateur(&self) -> String {
        let b = &self.bascules;
        let mut out = String::new();
        for (actif, nom) in [
            (b.shift, "SHIFT "),
            (b.alpha, "ALPHA "),
            (b.sto, "STO "),
            (b.rcl, "RCL "),
            (b.hyp, "HYP "),
        ] {
            if actif {
                out.push_str(nom);
            }
        }
        out.push_str(self.moteur.angle_mode().indicateur());
        out
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute du texte. Un "0" seul est remplacé, sauf si le texte commence
    /// par un opérateur, ')' ou '.'.
    pub fn inserer(&mut self, texte: &str) {
        let continue_le_zero = texte
            .chars()
            .next()
            .is_some_and(|c| matches!(c, '+' | '-' | '*' | '/' | '^' | ')' | '.'));

        if self.affichage == AFFICHAGE_ZERO && !continue_le_zero {
            self.affichage = texte.to_string();
        } else {
            self.affichage.push_str(texte);
        }
        self.focus_entree = true;
    }

    fn inserer_fonction(&mut self, nom: &str) {
        self.inserer(&format!("{nom}("));
    }

    /// sin -> asin (SHIFT) / sinh (HYP) / asinh (les deux).
    fn inserer_trig(&mut self, base: &str) {
        let prefixe = if self.bascules.shift { "a" } else { "" };
        let suffixe = if self.bascules.hyp { "h" } else { "" };
        self.inserer_fonction(&format!("{prefixe}{base}{suffixe}"));
    }

    /* ------------------------ Calculs ------------------------ */

    /// "=" : évalue l’affichage, remplace par le résultat formaté, qui devient Ans.
    pub fn calculer(&mut self) {
        let expr = self.affichage.trim().to_string();
        self.historique = format!("{expr}=");

        match self.moteur.evaluate_avec_demarche(&expr) {
            Ok((v, d)) => {
                self.affichage = formater_resultat(v);
                self.moteur.set_last_answer(self.affichage.clone());
                self.erreur.clear();
                self.demarche = d;
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_entree = true;
    }

    /// M+ : M = M + valeur(affichage).
    fn memoire_plus(&mut self) {
        match self.moteur.evaluate(&self.affichage) {
            Ok(v) => {
                let m = self.moteur.memory_add(v);
                self.historique = format!("M={}", formater_resultat(m));
                self.erreur.clear();
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    /// STO / RCL / ALPHA actifs : la touche désigne une variable.
    fn touche_variable(&mut self, touche: Touche) {
        if let Some(var) = touche.variable() {
            if self.bascules.sto {
                let r = self
                    .moteur
                    .evaluate(&self.affichage)
                    .and_then(|v| self.moteur.store(&var.to_string(), v));
                match r {
                    Ok(()) => {
                        self.historique = format!("{}→{var}", self.affichage);
                        self.erreur.clear();
                    }
                    Err(e) => self.set_erreur(e.to_string()),
                }
            } else {
                self.inserer(&var.to_string());
            }
        }

        let b = &mut self.bascules;
        b.sto = false;
        b.rcl = false;
        b.alpha = false;
    }

    /* ------------------------ Dispatch ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        let b = self.bascules;
        if b.sto || b.rcl || b.alpha {
            self.touche_variable(touche);
            return;
        }

        match touche {
            Touche::Egal => self.calculer(),
            Touche::On | Touche::Ac => self.reset_affichage(),
            Touche::Del => self.backspace(),
            Touche::Shift => self.bascules.shift = !self.bascules.shift,
            Touche::Alpha => self.bascules.alpha = !self.bascules.alpha,
            Touche::Hyp => self.bascules.hyp = !self.bascules.hyp,
            Touche::Rcl => {
                // SHIFT + RCL = STO
                if self.bascules.shift {
                    self.bascules.sto = true;
                    self.bascules.shift = false;
                } else {
                    self.bascules.rcl = true;
                }
            }
            Touche::Mode => {
                let mode = self.moteur.angle_mode().bascule();
                self.moteur.set_angle_mode(mode);
            }
            Touche::Sin => self.inserer_trig("sin"),
            Touche::Cos => self.inserer_trig("cos"),
            Touche::Tan => self.inserer_trig("tan"),
            Touche::Log => self.inserer_fonction("log"),
            Touche::Ln => self.inserer_fonction("ln"),
            Touche::Racine => self.inserer_fonction("√"),
            Touche::MPlus => self.memoire_plus(),
            Touche::Ans => self.inserer("Ans"),
            Touche::Carre => self.inserer("^2"),
            Touche::Cube => self.inserer("^3"),
            Touche::Inverse => self.inserer("^(-1)"),
            Touche::PuissanceY => self.inserer("^"),
            Touche::Exp10 => self.inserer("*10^"),
            Touche::Fois => self.inserer("*"),
            Touche::Divise => self.inserer("/"),
            Touche::Plus => self.inserer("+"),
            Touche::Moins => self.inserer("-"),
            Touche::Negatif => self.inserer("(-"),
            Touche::ParG => self.inserer("("),
            Touche::ParD => self.inserer(")"),
            Touche::Point => self.inserer("."),
            Touche::Chiffre(c) => self.inserer(&c.to_string()),
        }
        self.focus_entree = true;
    }
}
