// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (ordre source) en RPN (postfix)
// - Aucune sémantique numérique ici : on ne fait qu’ordonner.
//
// Règles:
// - Num / Ident : sortie directe
// - Fonction : empilée, ressort juste après sa parenthèse fermante
// - Virgule : vide les opérateurs jusqu’à la '(' de l’appel
// - Opérateur : dépile tant que le sommet est un opérateur plus fort
//   (ou égal, si l’opérateur courant est associatif à gauche)
//
// NOTE:
// - La comparaison `>` vs `>=` selon l’associativité donne
//   2^3^2 = 2^(3^2) et 2-3-1 = (2-3)-1.

use super::erreur::ErreurSyntaxe;
use super::jetons::Tok;
use super::tables::{Associativite, Fonction, Operateur};

/// Faut-il sortir `sommet` avant d’empiler `courant` ?
fn doit_depiler(sommet: Operateur, courant: Operateur) -> bool {
    let (p_top, p_tok) = (sommet.precedence(), courant.precedence());
    match courant.associativite() {
        Associativite::Gauche => p_top >= p_tok,
        Associativite::Droite => p_top > p_tok,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction("max"), LPar, Num(3), Virgule, Num(9), RPar]
///   rpn:    [Num(3), Num(9), Fonction("max")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurSyntaxe> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) | Tok::Ident(_) => out.push(tok),

            Tok::Fonction(_) | Tok::LPar => ops.push(tok),

            Tok::Virgule => loop {
                match ops.last() {
                    None => return Err(ErreurSyntaxe::SeparateurHorsFonction),
                    Some(Tok::LPar) => break,
                    Some(_) => {
                        if let Some(top) = ops.pop() {
                            out.push(top);
                        }
                    }
                }
            },

            Tok::Op(courant) => {
                // seuls les opérateurs se dépilent : '(' et fonctions bloquent
                while let Some(Tok::Op(sommet)) = ops.last() {
                    if !doit_depiler(*sommet, courant) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        None => return Err(ErreurSyntaxe::ParenthesesDesequilibrees),
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                    }
                }

                // si une fonction est au sommet, elle s’attache à ses arguments
                if matches!(ops.last(), Some(Tok::Fonction(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurSyntaxe::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    // garde-fou : le lexer ne produit que des fonctions connues
    for t in &out {
        if let Tok::Fonction(nom) = t {
            if Fonction::depuis_nom(nom).is_none() {
                return Err(ErreurSyntaxe::FonctionNonSupportee(nom.clone()));
            }
        }
    }

    Ok(out)
}
