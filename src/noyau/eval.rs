//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> exécution sur pile -> valeur
//!
//! Chaque étape échoue indépendamment : la première erreur coupe le pipeline.
//! Le seul état qui traverse les appels (`ans`) est fourni par l’appelant.

use log::debug;
use num_traits::Zero;

use super::erreur::{Erreur, ErreurEvaluation};
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::to_rpn;
use super::tables::{constante, Fonction, Operateur, ANS};

/// Trace du pipeline (panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub demarche: DemarcheNoyau,
}

/// API publique : évalue une ligne avec le résultat précédent `ans`.
pub fn eval_expression(expr_str: &str, ans: f64) -> Result<f64, Erreur> {
    eval_detaillee(expr_str, ans).map(|e| e.valeur)
}

/// Comme `eval_expression`, avec les jetons et la RPN rendus en texte.
pub fn eval_detaillee(expr_str: &str, ans: f64) -> Result<Evaluation, Erreur> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    let jetons_txt = format_tokens(&jetons);
    debug!("jetons ({}) : {jetons_txt}", jetons.len());

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    debug!("rpn : {rpn_txt}");

    // 3) Pile
    let valeur = evaluate_rpn(&rpn, ans)?;
    debug!("valeur : {valeur}");

    Ok(Evaluation {
        valeur,
        demarche: DemarcheNoyau {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    })
}

/// Exécute une RPN. La pile finale doit contenir exactement une valeur.
pub fn evaluate_rpn(rpn: &[Tok], ans: f64) -> Result<f64, ErreurEvaluation> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(txt) => {
                let v = txt
                    .parse::<f64>()
                    .map_err(|_| ErreurEvaluation::NombreMalForme(txt.clone()))?;
                st.push(v);
            }

            Tok::Ident(nom) => {
                let v = if nom == ANS {
                    ans
                } else {
                    constante(nom).ok_or_else(|| ErreurEvaluation::IdentifiantInterne(nom.clone()))?
                };
                st.push(v);
            }

            Tok::Op(op) if op.est_unaire() => {
                let b = st.pop().ok_or(ErreurEvaluation::OperandeUnaireManquant)?;
                st.push(op.appliquer_unaire(b));
            }

            Tok::Op(op) => {
                let b = st.pop().ok_or(ErreurEvaluation::OperandesBinairesManquants)?;
                let a = st.pop().ok_or(ErreurEvaluation::OperandesBinairesManquants)?;

                if *op == Operateur::Divise && b.is_zero() {
                    return Err(ErreurEvaluation::DivisionParZero);
                }
                st.push(op.appliquer_binaire(a, b));
            }

            Tok::Fonction(nom) => {
                let f = Fonction::depuis_nom(nom)
                    .ok_or_else(|| ErreurEvaluation::FonctionInterne(nom.clone()))?;
                let n = f.arite();
                if st.len() < n {
                    return Err(ErreurEvaluation::ArgumentsInsuffisants {
                        fonction: nom.clone(),
                        attendus: n,
                    });
                }
                // le haut de pile est le dernier argument : split_off garde l’ordre source
                let args = st.split_off(st.len() - n);
                st.push(f.appliquer(&args)?);
            }

            // ne survivent pas à to_rpn
            Tok::LPar | Tok::RPar | Tok::Virgule => {
                return Err(ErreurEvaluation::ExpressionInvalide)
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurEvaluation::ExpressionInvalide),
    }
}
