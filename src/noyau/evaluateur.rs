// src/noyau/evaluateur.rs
//
// Shunting-yard à deux piles (valeurs + opérateurs), sans AST
// -----------------------------------------------------------
// Règles:
// - Num              => pile des valeurs
// - Ident(name)      => fonction en attente (sortira après sa parenthèse fermante)
// - '-' unaire       => si en début, ou après un opérateur / '(' : on empile -1 et '*'
// - opérateur binaire => dépile tant que le sommet a un rang >= (donc ^ est associatif
//                        à GAUCHE : 2^3^2 = 64, comportement d'origine conservé)
//
// NOTE:
// - '(' et les fonctions ont le rang le plus bas : aucun opérateur entrant ne les dépile.
// - Fin : il doit rester exactement une valeur.

use num_traits::Zero;

use super::erreur::{ErreurCalcul, Resultat};
use super::fonctions::Fonction;
use super::jetons::Tok;
use super::memoire::ModeAngle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    // Symbole hors table : gardé tel quel, échoue à l'application
    Autre(char),
}

impl From<char> for Operateur {
    fn from(c: char) -> Self {
        match c {
            '+' => Operateur::Plus,
            '-' => Operateur::Moins,
            '*' => Operateur::Fois,
            '/' => Operateur::Divise,
            '^' => Operateur::Puissance,
            autre => Operateur::Autre(autre),
        }
    }
}

impl Operateur {
    fn rang(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
            Operateur::Autre(_) => 0,
        }
    }

    /// gauche OP droite
    fn calculer(self, gauche: f64, droite: f64) -> Resultat<f64> {
        match self {
            Operateur::Plus => Ok(gauche + droite),
            Operateur::Moins => Ok(gauche - droite),
            Operateur::Fois => Ok(gauche * droite),
            Operateur::Divise => {
                if droite.is_zero() {
                    return Err(ErreurCalcul::DivisionByZero);
                }
                Ok(gauche / droite)
            }
            // bases négatives + exposant fractionnaire => NaN (pas d'erreur)
            Operateur::Puissance => Ok(gauche.powf(droite)),
            Operateur::Autre(c) => {
                log::debug!("opérateur inconnu : {c:?}");
                Err(ErreurCalcul::Syntax)
            }
        }
    }
}

/// Entrée de la pile des opérateurs.
#[derive(Clone, Debug, PartialEq)]
enum EntreeOp {
    Binaire(Operateur),
    Fonction(String),
    ParenGauche,
}

impl EntreeOp {
    /// Rang de comparaison ; None = jamais dépilé par un opérateur entrant.
    fn rang(&self) -> Option<u8> {
        match self {
            EntreeOp::Binaire(op) => Some(op.rang()),
            EntreeOp::Fonction(_) | EntreeOp::ParenGauche => None,
        }
    }
}

/// Un '-' est unaire en début d'expression, ou juste après + - * / ^ (.
fn est_moins_unaire(precedent: Option<&Tok>) -> bool {
    match precedent {
        None | Some(Tok::LPar) => true,
        Some(Tok::Op(c)) => matches!(c, '+' | '-' | '*' | '/' | '^'),
        Some(_) => false,
    }
}

#[derive(Debug)]
struct Piles {
    valeurs: Vec<f64>,
    ops: Vec<EntreeOp>,
    mode: ModeAngle,
}

impl Piles {
    fn new(mode: ModeAngle) -> Self {
        Self {
            valeurs: Vec::new(),
            ops: Vec::new(),
            mode,
        }
    }

    /// Dépile un opérateur binaire et l'applique aux deux valeurs du sommet.
    fn appliquer_operateur(&mut self) -> Resultat<()> {
        let op = match self.ops.pop().ok_or(ErreurCalcul::StackUnderflow)? {
            EntreeOp::Binaire(op) => op,
            EntreeOp::ParenGauche => return Err(ErreurCalcul::MismatchedParentheses),
            EntreeOp::Fonction(name) => {
                // ex: "sin5" : fonction sans argument entre parenthèses
                log::debug!("fonction {name:?} sans parenthèses");
                return Err(ErreurCalcul::Syntax);
            }
        };

        if self.valeurs.len() < 2 {
            return Err(ErreurCalcul::Syntax);
        }
        let droite = self.valeurs.pop().ok_or(ErreurCalcul::StackUnderflow)?;
        let gauche = self.valeurs.pop().ok_or(ErreurCalcul::StackUnderflow)?;

        self.valeurs.push(op.calculer(gauche, droite)?);
        Ok(())
    }

    /// Dépile la fonction du sommet et l'applique à la valeur du sommet.
    fn appliquer_fonction(&mut self) -> Resultat<()> {
        let name = match self.ops.pop() {
            Some(EntreeOp::Fonction(name)) => name,
            _ => return Err(ErreurCalcul::StackUnderflow),
        };
        let x = self.valeurs.pop().ok_or(ErreurCalcul::Syntax)?;
        let f: Fonction = name.parse()?;
        self.valeurs.push(f.appliquer(x, self.mode));
        Ok(())
    }

    fn fermer_parenthese(&mut self) -> Resultat<()> {
        // dépile jusqu'à '('
        loop {
            match self.ops.last() {
                None => return Err(ErreurCalcul::MismatchedParentheses),
                Some(EntreeOp::ParenGauche) => {
                    self.ops.pop();
                    break;
                }
                Some(_) => self.appliquer_operateur()?,
            }
        }

        // si une fonction est au sommet, elle prend la valeur de la parenthèse
        if matches!(self.ops.last(), Some(EntreeOp::Fonction(_))) {
            self.appliquer_fonction()?;
        }
        Ok(())
    }

    fn pousser_operateur(&mut self, op: Operateur) -> Resultat<()> {
        while let Some(top) = self.ops.last() {
            match top.rang() {
                Some(r) if r >= op.rang() => self.appliquer_operateur()?,
                _ => break,
            }
        }
        self.ops.push(EntreeOp::Binaire(op));
        Ok(())
    }
}

/// Évalue une suite de jetons (déjà prétraitée) dans le mode d'angle donné.
pub fn evaluer_jetons(tokens: &[Tok], mode: ModeAngle) -> Resultat<f64> {
    let mut piles = Piles::new(mode);
    let mut precedent: Option<&Tok> = None;

    for tok in tokens {
        match tok {
            Tok::Num(n) => piles.valeurs.push(*n),
            Tok::Ident(name) => piles.ops.push(EntreeOp::Fonction(name.clone())),
            Tok::LPar => piles.ops.push(EntreeOp::ParenGauche),
            Tok::RPar => piles.fermer_parenthese()?,
            Tok::Op('-') if est_moins_unaire(precedent) => {
                // moins unaire = multiplication par -1
                piles.valeurs.push(-1.0);
                piles.ops.push(EntreeOp::Binaire(Operateur::Fois));
            }
            Tok::Op(c) => piles.pousser_operateur(Operateur::from(*c))?,
        }
        precedent = Some(tok);
    }

    // vide la pile ops
    while !piles.ops.is_empty() {
        piles.appliquer_operateur()?;
    }

    if piles.valeurs.len() != 1 {
        return Err(ErreurCalcul::Syntax);
    }
    piles.valeurs.pop().ok_or(ErreurCalcul::StackUnderflow)
}
