//! Tests scientifiques (campagne) : propriétés arithmétiques du pipeline complet.
//!
//! - précédence / associativité / parenthèses
//! - signes unaires (dont `--3` = 3 : double négation chaînée)
//! - erreurs numériques sans NaN ni infini
//! - arité des fonctions, constantes, `ans`
//! - rejet des entrées mal formées

use super::erreur::{Erreur, ErreurEvaluation, ErreurLexicale, ErreurSyntaxe};
use super::eval_expression;

const TOLERANCE: f64 = 1e-9;

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr, 0.0).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn eval_err(expr: &str) -> Erreur {
    match eval_expression(expr, 0.0) {
        Ok(v) => panic!("expr={expr:?} aurait dû échouer, valeur={v}"),
        Err(e) => e,
    }
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() <= TOLERANCE,
        "expr={expr:?} valeur={v} attendu={attendu}"
    );
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(eval_ok("2+2*3"), 8.0);
    assert_eq!(eval_ok("2*3+4"), 10.0);
    assert_eq!(eval_ok("1+8/4"), 3.0);
}

#[test]
fn sci_associativite() {
    assert_eq!(eval_ok("2^3^2"), 512.0);
    assert_eq!(eval_ok("10-3-2"), 5.0);
    assert_eq!(eval_ok("2-3-1"), -2.0);
    assert_eq!(eval_ok("64/4/2"), 8.0);
}

#[test]
fn sci_parentheses_prioritaires() {
    assert_eq!(eval_ok("(1+2)^3/9"), 3.0);
    assert_eq!(eval_ok("2*(3+4)"), 14.0);
    assert_eq!(eval_ok("((((7))))"), 7.0);
}

/* ------------------------ Signes unaires ------------------------ */

#[test]
fn sci_unaires() {
    assert_eq!(eval_ok("-3+4"), 1.0);
    assert_eq!(eval_ok("3*-2"), -6.0);
    assert_eq!(eval_ok("+5"), 5.0);
    assert_eq!(eval_ok("2^-1"), 0.5);
    assert_eq!(eval_ok("-(2+3)"), -5.0);
}

#[test]
fn sci_double_signe_chaine() {
    assert_eq!(eval_ok("--3"), 3.0);
    assert_eq!(eval_ok("+-3"), -3.0);
    assert_eq!(eval_ok("1--1"), 2.0);
}

#[test]
fn sci_unaire_lie_plus_fort_que_puissance() {
    // (-3)^2
    assert_eq!(eval_ok("-3^2"), 9.0);
}

/* ------------------------ Erreurs numériques ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_eq!(
        eval_err("1/0"),
        Erreur::Evaluation(ErreurEvaluation::DivisionParZero)
    );
    assert_eq!(
        eval_err("5/(2-2)"),
        Erreur::Evaluation(ErreurEvaluation::DivisionParZero)
    );
}

#[test]
fn sci_sqrt_negatif() {
    assert_eq!(
        eval_err("sqrt(-1)"),
        Erreur::Evaluation(ErreurEvaluation::Domaine {
            fonction: "sqrt".into()
        })
    );
    assert_eq!(eval_ok("sqrt(0)"), 0.0);
    assert_eq!(eval_ok("sqrt(16)"), 4.0);
}

/* ------------------------ Fonctions / constantes ------------------------ */

#[test]
fn sci_arite_des_fonctions() {
    assert_eq!(
        eval_err("max(3)"),
        Erreur::Evaluation(ErreurEvaluation::ArgumentsInsuffisants {
            fonction: "max".into(),
            attendus: 2
        })
    );
    assert_eq!(eval_ok("max(3,9)"), 9.0);
    assert_eq!(eval_ok("max(9, 3)"), 9.0);
    assert_eq!(eval_ok("min(4,-2)"), -2.0);
    assert_eq!(eval_ok("min(-2, 4)"), -2.0);
}

#[test]
fn sci_fonctions_unaires() {
    assert_proche("log(100)", 2.0);
    assert_proche("abs(-3.5)", 3.5);
    assert_eq!(eval_ok("floor(2.7)"), 2.0);
    assert_eq!(eval_ok("ceil(2.1)"), 3.0);
    assert_eq!(eval_ok("round(2.5)"), 3.0);
    assert_eq!(eval_ok("round(-2.5)"), -3.0);
    assert_proche("cos(0)", 1.0);
    assert_proche("tan(pi/4)", 1.0);
}

#[test]
fn sci_constantes() {
    assert_proche("sin(pi/2)", 1.0);
    assert_proche("ln(e)", 1.0);
    assert_proche("PI", std::f64::consts::PI);
}

#[test]
fn sci_fonction_sans_parentheses() {
    // le shunting-yard accepte l’argument nu
    assert_proche("sqrt 9", 3.0);
}

/* ------------------------ ans ------------------------ */

#[test]
fn sci_ans_vaut_la_valeur_fournie() {
    assert_eq!(eval_expression("ans", 12.5), Ok(12.5));
    assert_eq!(eval_expression("1+ans", 41.0), Ok(42.0));
    assert_eq!(eval_expression("ans*ans", -3.0), Ok(9.0));
}

#[test]
fn sci_idempotence() {
    for expr in ["2+2*3", "sin(pi/2)", "1/0", "ans^2", "max(3)"] {
        assert_eq!(
            eval_expression(expr, 7.0),
            eval_expression(expr, 7.0),
            "expr={expr:?}"
        );
    }
}

/* ------------------------ Entrées mal formées ------------------------ */

#[test]
fn sci_rejets_structurels() {
    assert_eq!(
        eval_err("(1+2"),
        Erreur::Syntaxe(ErreurSyntaxe::ParenthesesDesequilibrees)
    );
    assert_eq!(
        eval_err("1+2)"),
        Erreur::Syntaxe(ErreurSyntaxe::ParenthesesDesequilibrees)
    );
    assert_eq!(
        eval_err(",5"),
        Erreur::Syntaxe(ErreurSyntaxe::SeparateurHorsFonction)
    );
    assert_eq!(
        eval_err("1+"),
        Erreur::Evaluation(ErreurEvaluation::OperandesBinairesManquants)
    );
    assert_eq!(
        eval_err("-"),
        Erreur::Evaluation(ErreurEvaluation::OperandeUnaireManquant)
    );
}

#[test]
fn sci_pile_finale_invalide() {
    assert_eq!(
        eval_err("2 3"),
        Erreur::Evaluation(ErreurEvaluation::ExpressionInvalide)
    );
    assert_eq!(
        eval_err(""),
        Erreur::Evaluation(ErreurEvaluation::ExpressionInvalide)
    );
    assert_eq!(
        eval_err("(1,2)"),
        Erreur::Evaluation(ErreurEvaluation::ExpressionInvalide)
    );
}

#[test]
fn sci_rejets_lexicaux() {
    assert_eq!(
        eval_err("2 # 3"),
        Erreur::Lexicale(ErreurLexicale::CaractereInvalide('#'))
    );
    assert_eq!(
        eval_err("x+1"),
        Erreur::Lexicale(ErreurLexicale::IdentifiantInconnu("x".into()))
    );
}

/* ------------------------ Nombres ------------------------ */

#[test]
fn sci_litteraux() {
    assert_eq!(eval_ok("1e3"), 1000.0);
    assert_eq!(eval_ok("2.5E-1"), 0.25);
    assert_eq!(eval_ok(".5+.5"), 1.0);
    assert_proche("2*e", 2.0 * std::f64::consts::E);
}
