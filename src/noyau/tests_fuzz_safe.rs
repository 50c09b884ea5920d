//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, sqrt négatif, etc.)
//! - invariant clé : jamais d’erreur interne, jamais de panique

use std::time::{Duration, Instant};

use super::erreur::{Erreur, ErreurEvaluation};
use super::eval_expression;

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

/* ------------------------ Helpers fuzz ------------------------ */

/// Liste blanche : erreurs *normales* sur des expressions bien formées.
fn is_erreur_attendue(e: &Erreur) -> bool {
    matches!(
        e,
        Erreur::Evaluation(ErreurEvaluation::DivisionParZero | ErreurEvaluation::Domaine { .. })
    )
}

/// Erreurs qui ne doivent JAMAIS sortir (le lexer les rend inatteignables).
fn is_erreur_interne(e: &Erreur) -> bool {
    matches!(
        e,
        Erreur::Evaluation(
            ErreurEvaluation::NombreMalForme(_)
                | ErreurEvaluation::IdentifiantInterne(_)
                | ErreurEvaluation::FonctionInterne(_)
        )
    )
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(10);
    match rng.pick(4) {
        0 => format!("{a}.5"),
        1 => format!("{a}e1"),
        _ => format!("{a}"),
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "pi".to_string(),
        1 => "e".to_string(),
        2 => "ans".to_string(),
        _ => gen_nombre(rng),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let d = depth - 1;

    match rng.pick(10) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, d), gen_expr(rng, d)),
        2 => format!("({}-{})", gen_expr(rng, d), gen_expr(rng, d)),
        3 => format!("({}*{})", gen_expr(rng, d), gen_expr(rng, d)),
        4 => format!("({}/{})", gen_expr(rng, d), gen_expr(rng, d)),
        5 => format!("-{}", gen_expr(rng, d)),
        6 => {
            let f = ["sin", "cos", "abs", "floor", "sqrt", "round"][rng.pick(6) as usize];
            format!("{f}({})", gen_expr(rng, d))
        }
        7 => {
            let f = if rng.coin() { "max" } else { "min" };
            format!("{f}({}, {})", gen_expr(rng, d), gen_expr(rng, d))
        }
        8 => format!("({}^2)", gen_expr(rng, d)),
        _ => format!("{} - 0", gen_expr(rng, d)),
    }
}

/// Bruit : caractères pris dans la grammaire (et un peu hors grammaire).
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: [&str; 16] = [
        "1", "2.5", "+", "-", "*", "/", "^", "(", ")", ",", "pi", "max", "sqrt", "ans", " ", "$",
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match eval_expression(&expr, 1.5) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // Même seed => mêmes expressions => mêmes sorties
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        budget(t0, max);

        let ea = gen_expr(&mut a, 3);
        let eb = gen_expr(&mut b, 3);
        assert_eq!(ea, eb);

        let ra = eval_expression(&ea, -2.0).map(f64::to_bits);
        let rb = eval_expression(&eb, -2.0).map(f64::to_bits);
        assert_eq!(ra, rb, "expr={ea:?}");
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..500 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let expr = gen_bruit(&mut rng, len);

        if let Err(e) = eval_expression(&expr, 0.0) {
            assert!(!is_erreur_interne(&e), "erreur interne: expr={expr:?} err={e}");
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let v = eval_expression(&expr, 0.0).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*0.5 = 400 (exact en binaire)
    assert_eq!(v, 400.0);
}

#[test]
fn fuzz_safe_longue_chaine_de_signes() {
    // 200 moins unaires : nombre pair => identité
    let expr = format!("{}7", "-".repeat(200));
    assert_eq!(eval_expression(&expr, 0.0), Ok(7.0));
}
