// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

/// Jeton lexical. Produit à chaque évaluation, jamais conservé.
#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Nom de fonction (non validé ici : la validation se fait à l'application)
    Ident(String),

    // Caractère d'opérateur tel quel (+ - * / ^, ou tout autre symbole)
    Op(char),

    LPar,
    RPar,
}

/// Mots lus comme des nombres : permet à un Ans non fini ("NaN", "inf") de revenir.
fn mot_numerique(word: &str) -> Option<f64> {
    match word {
        "NaN" => Some(f64::NAN),
        "inf" => Some(f64::INFINITY),
        _ => None,
    }
}

/// Tokenize une chaîne (déjà prétraitée) en jetons.
/// Supporte:
/// - nombres décimaux : suite maximale de chiffres et de '.' (ex: 12, 3.5, .5)
/// - identifiants : suite maximale de lettres (Unicode)
/// - parenthèses ( )
/// - tout autre caractère non blanc => opérateur
///
/// Erreur seulement si un nombre est mal formé (ex: 1.2.3).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            let n = txt.parse::<f64>().map_err(|_| {
                log::debug!("nombre mal formé : {txt:?}");
                ErreurCalcul::Syntax
            })?;
            out.push(Tok::Num(n));
            continue;
        }

        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            match mot_numerique(&word) {
                Some(n) => out.push(Tok::Num(n)),
                None => out.push(Tok::Ident(word)),
            }
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            _ => out.push(Tok::Op(c)),
        }
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => format!("{n}"),
            Tok::Ident(name) => name.clone(),
            Tok::Op(c) => c.to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
