// src/noyau/pretraitement.rs
//
// Prétraitement du texte brut (avant jetons)
// ------------------------------------------
// Ordre imposé (l'ordre change le résultat) :
// 1) variables / Ans / π / e  ->  littéraux entre parenthèses
// 2) √ -> sqrt
// 3) multiplication implicite : 5sin(30) -> 5*sin(30), (2)(3) -> (2)*(3)

use super::fonctions::est_fonction;
use super::memoire::{constante, Memoire, Variable};
use super::reglages::Substitution;

/// Pipeline complet : texte brut -> texte prêt pour `tokenize`.
pub fn pretraiter(expr: &str, memoire: &Memoire, politique: Substitution) -> String {
    let s = match politique {
        Substitution::ParJetons => substituer_par_mots(expr, memoire),
        Substitution::Litterale => substituer_litteral(expr, memoire),
    };
    let s = normaliser_radical(&s);
    let s = multiplication_implicite(&s);
    log::trace!("prétraitement : {expr:?} -> {s:?}");
    s
}

/// Valeur -> texte relisible par `tokenize` (jamais de notation exposant).
/// NaN / ±∞ s'écrivent NaN, inf, -inf.
pub fn litteral(v: f64) -> String {
    format!("({v})")
}

/// Valeur d'une lettre remplaçable (variable réservée ou constante).
fn valeur_lettre(c: char, memoire: &Memoire) -> Option<f64> {
    match Variable::try_from(c) {
        Ok(v) => Some(memoire.valeur(v)),
        Err(_) => constante(c),
    }
}

/// Étape 1 (par mots) : on ne touche qu'aux suites de lettres complètes.
/// - nom de fonction                      -> inchangé
/// - mot fait de Ans, A..F, X, M, e, π    -> chaque morceau remplacé
/// - même chose suivie d'un nom de fonction (Asin, eln, Anssqrt)
///   -> préfixe remplacé, fonction intacte
/// - autre mot                            -> inchangé (échouera plus tard : fonction inconnue)
fn substituer_par_mots(expr: &str, memoire: &Memoire) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let mut out = String::with_capacity(expr.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if !c.is_alphabetic() {
            out.push(c);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_alphabetic() {
            i += 1;
        }
        substituer_mot(&chars[start..i], memoire, &mut out);
    }

    out
}

fn substituer_mot(mot: &[char], memoire: &Memoire, out: &mut String) {
    let texte: String = mot.iter().collect();
    if est_fonction(&texte) {
        out.push_str(&texte);
        return;
    }
    if let Some(s) = remplacer_lettres(mot, memoire) {
        out.push_str(&s);
        return;
    }

    // Préfixe le plus court : le nom de fonction le plus long gagne (Asinh -> A, sinh).
    for k in 1..mot.len() {
        let fonction: String = mot[k..].iter().collect();
        if !est_fonction(&fonction) {
            continue;
        }
        if let Some(s) = remplacer_lettres(&mot[..k], memoire) {
            out.push_str(&s);
            out.push_str(&fonction);
            return;
        }
    }

    out.push_str(&texte);
}

/// Mot entièrement fait de `Ans` et de lettres remplaçables -> littéraux collés.
fn remplacer_lettres(mot: &[char], memoire: &Memoire) -> Option<String> {
    let mut out = String::new();
    let mut i = 0;
    while i < mot.len() {
        if mot[i..].starts_with(&['A', 'n', 's']) {
            out.push('(');
            out.push_str(memoire.last_answer());
            out.push(')');
            i += 3;
            continue;
        }
        out.push_str(&litteral(valeur_lettre(mot[i], memoire)?));
        i += 1;
    }
    Some(out)
}

/// Étape 1 (littérale) : remplacement naïf sur tout le texte, comme la calculatrice d'origine.
/// Les lettres sont remplacées même au milieu d'un mot.
fn substituer_litteral(expr: &str, memoire: &Memoire) -> String {
    let mut s = expr.to_string();
    for v in Variable::TOUTES {
        s = s.replace(v.lettre(), &litteral(memoire.valeur(v)));
    }
    s = s.replace("Ans", &format!("({})", memoire.last_answer()));
    for c in ['π', 'e'] {
        if let Some(k) = constante(c) {
            s = s.replace(c, &litteral(k));
        }
    }
    s
}

/// Étape 2 : le glyphe radical devient le nom de fonction.
fn normaliser_radical(s: &str) -> String {
    s.replace('√', "sqrt")
}

/// Étape 3 : insère '*' entre
/// - chiffre et (lettre ASCII | '(')
/// - ')' et chiffre
/// - ')' et (lettre ASCII | '(')
fn multiplication_implicite(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if let Some(p) = prev {
            let apres_chiffre = p.is_ascii_digit() && (c.is_ascii_alphabetic() || c == '(');
            let apres_parenthese =
                p == ')' && (c.is_ascii_digit() || c.is_ascii_alphabetic() || c == '(');
            if apres_chiffre || apres_parenthese {
                out.push('*');
            }
        }
        out.push(c);
        prev = Some(c);
    }

    out
}
