//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique, et même entrée + même mémoire => même sortie
//! - expressions bien parenthésées => jamais MismatchedParentheses

use std::time::{Duration, Instant};

use super::{ErreurCalcul, ModeAngle, Moteur, Reglages, Substitution};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const FONCTIONS: [&str; 15] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh", "asinh", "acosh",
    "atanh", "sqrt", "log", "ln",
];

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => format!("{}", rng.pick(100)),
        1 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        2 => ["A", "B", "X", "M", "Ans"][rng.pick(5) as usize].to_string(),
        3 => ["π", "e"][rng.pick(2) as usize].to_string(),
        4 => "0".to_string(),
        _ => format!("{}", rng.pick(10) + 1),
    }
}

/// Expression bien formée et bien parenthésée (profondeur bornée).
fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }
    match rng.pick(6) {
        0 => {
            let op = ["+", "-", "*", "/", "^"][rng.pick(5) as usize];
            format!(
                "{}{op}{}",
                gen_expr(rng, profondeur - 1),
                gen_expr(rng, profondeur - 1)
            )
        }
        1 => format!("({})", gen_expr(rng, profondeur - 1)),
        2 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, profondeur - 1))
        }
        3 => format!("-{}", gen_expr(rng, profondeur - 1)),
        4 => {
            // multiplication implicite : 2sin(..), Acos(..), Anssqrt(..), (..)ln(..)
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            let gauche = match rng.pick(3) {
                0 => format!("{}", rng.pick(10) + 1),
                1 => ["A", "B", "X", "M", "Ans", "e", "π", "AB"][rng.pick(8) as usize].to_string(),
                _ => format!("({})", gen_expr(rng, profondeur - 1)),
            };
            format!("{gauche}{f}({})", gen_expr(rng, profondeur - 1))
        }
        _ => gen_atome(rng),
    }
}

/// Bruit : caractères quelconques du clavier (parenthèses non garanties).
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: [char; 24] = [
        '1', '2', '.', '+', '-', '*', '/', '^', '(', ')', 's', 'i', 'n', 'A', 'X', 'e', 'π',
        '√', ' ', 'q', '%', 'M', 'l', 'g',
    ];
    let n = rng.pick(24) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn meme_resultat(a: &Result<f64, ErreurCalcul>, b: &Result<f64, ErreurCalcul>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.to_bits() == y.to_bits(),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

fn moteur_fuzz(rng: &mut Rng, substitution: Substitution) -> Moteur {
    let mode = if rng.coin() {
        ModeAngle::Degres
    } else {
        ModeAngle::Radians
    };
    let mut m = Moteur::avec_reglages(
        Reglages::default()
            .with_mode_angle(mode)
            .with_substitution(substitution),
    );
    for name in ["A", "B", "X", "M"] {
        let v = f64::from(rng.pick(200)) / 10.0 - 10.0;
        m.store(name, v).unwrap();
    }
    m.set_last_answer(format!("{}", rng.pick(50)));
    m
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_bien_forme_jamais_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);
    let mut rng = Rng::new(0x5eed_0001);

    for _ in 0..2000 {
        let m = moteur_fuzz(&mut rng, Substitution::ParJetons);
        let expr = gen_expr(&mut rng, 4);
        let r1 = m.evaluate(&expr);
        let r2 = m.evaluate(&expr);
        assert!(meme_resultat(&r1, &r2), "non déterministe: {expr:?}");
        assert_ne!(
            r1,
            Err(ErreurCalcul::MismatchedParentheses),
            "expr={expr:?}"
        );
        if let Err(ErreurCalcul::UnknownFunction(f)) = &r1 {
            panic!("fonction inconnue {f:?} dans expr={expr:?}");
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);
    let mut rng = Rng::new(0x5eed_0002);

    for k in 0..3000 {
        let substitution = if k % 2 == 0 {
            Substitution::ParJetons
        } else {
            Substitution::Litterale
        };
        let m = moteur_fuzz(&mut rng, substitution);
        let expr = gen_bruit(&mut rng);
        let r1 = m.evaluate(&expr);
        let r2 = m.evaluate(&expr);
        assert!(meme_resultat(&r1, &r2), "non déterministe: {expr:?}");
        budget(t0, max);
    }
}

#[test]
fn fuzz_profondeur_parentheses() {
    // 500 niveaux : deux piles sur le tas, pas de récursion
    let m = Moteur::new();
    let expr = format!("{}1{}", "(".repeat(500), ")".repeat(500));
    assert_eq!(m.evaluate(&expr), Ok(1.0));

    let expr = format!("{}2{}", "sqrt(".repeat(300), ")".repeat(300));
    let v = m.evaluate(&expr).unwrap();
    assert!((v - 1.0).abs() < 1e-9);
}
