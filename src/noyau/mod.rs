//! Noyau flottant
//!
//! Organisation interne :
//! - tables.rs   : opérateurs, fonctions, constantes (lecture seule)
//! - jetons.rs   : tokenisation (+/- unaires selon le jeton précédent)
//! - rpn.rs      : shunting-yard -> RPN
//! - eval.rs     : exécution de la RPN + pipeline complet
//! - erreur.rs   : erreurs par étape
//! - format.rs   : affichage `%.15g`

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod tables;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{eval_detaillee, eval_expression};
pub use format::formater_nombre;
