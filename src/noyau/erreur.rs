// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
//
// Une erreur = une étape (lexique / syntaxe / évaluation) + un genre précis.
// Toutes sont terminales : le pipeline s’arrête à la première.

use std::fmt;

/// Erreurs de la tokenisation (jetons.rs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurLexicale {
    /// Identifiant qui n’est ni fonction, ni constante, ni `ans`.
    IdentifiantInconnu(String),
    /// Caractère hors grammaire.
    CaractereInvalide(char),
}

/// Erreurs de structure (rpn.rs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurSyntaxe {
    /// `,` sans parenthèse ouvrante en dessous.
    SeparateurHorsFonction,
    ParenthesesDesequilibrees,
    /// Garde-fou : un nom de fonction inconnu a atteint la sortie.
    FonctionNonSupportee(String),
}

/// Erreurs d’exécution de la RPN (eval.rs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurEvaluation {
    OperandeUnaireManquant,
    OperandesBinairesManquants,
    DivisionParZero,
    ArgumentsInsuffisants { fonction: String, attendus: usize },
    /// Argument hors domaine (ex: sqrt d’un négatif).
    Domaine { fonction: String },
    /// Pile finale de taille != 1.
    ExpressionInvalide,

    // Internes : inatteignables si le lexer fait son travail.
    NombreMalForme(String),
    IdentifiantInterne(String),
    FonctionInterne(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Erreur {
    Lexicale(ErreurLexicale),
    Syntaxe(ErreurSyntaxe),
    Evaluation(ErreurEvaluation),
}

impl Erreur {
    /// Nom de l’étape qui a échoué (pour la démarche / les logs).
    pub fn etape(&self) -> &'static str {
        match self {
            Erreur::Lexicale(_) => "jetons",
            Erreur::Syntaxe(_) => "rpn",
            Erreur::Evaluation(_) => "évaluation",
        }
    }
}

impl From<ErreurLexicale> for Erreur {
    fn from(e: ErreurLexicale) -> Self {
        Erreur::Lexicale(e)
    }
}

impl From<ErreurSyntaxe> for Erreur {
    fn from(e: ErreurSyntaxe) -> Self {
        Erreur::Syntaxe(e)
    }
}

impl From<ErreurEvaluation> for Erreur {
    fn from(e: ErreurEvaluation) -> Self {
        Erreur::Evaluation(e)
    }
}

impl fmt::Display for ErreurLexicale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdentifiantInconnu(nom) => write!(f, "identifiant inconnu: {nom}"),
            Self::CaractereInvalide(c) => write!(f, "caractère invalide: '{c}'"),
        }
    }
}

impl fmt::Display for ErreurSyntaxe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeparateurHorsFonction => write!(f, "virgule hors d’un appel de fonction"),
            Self::ParenthesesDesequilibrees => write!(f, "parenthèses déséquilibrées"),
            Self::FonctionNonSupportee(nom) => write!(f, "fonction non supportée: {nom}"),
        }
    }
}

impl fmt::Display for ErreurEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OperandeUnaireManquant => write!(f, "opérateur unaire sans opérande"),
            Self::OperandesBinairesManquants => {
                write!(f, "opérateur binaire avec trop peu d’opérandes")
            }
            Self::DivisionParZero => write!(f, "division par zéro"),
            Self::ArgumentsInsuffisants { fonction, attendus } => write!(
                f,
                "fonction {fonction} appelée avec trop peu d’arguments ({attendus} attendus)"
            ),
            Self::Domaine { fonction } => {
                write!(f, "{fonction} : argument hors domaine (négatif)")
            }
            Self::ExpressionInvalide => write!(f, "expression invalide"),
            Self::NombreMalForme(txt) => write!(f, "nombre mal formé: {txt}"),
            Self::IdentifiantInterne(nom) => write!(f, "identifiant inattendu en RPN: {nom}"),
            Self::FonctionInterne(nom) => write!(f, "fonction inattendue en RPN: {nom}"),
        }
    }
}

impl fmt::Display for Erreur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Erreur::Lexicale(e) => e.fmt(f),
            Erreur::Syntaxe(e) => e.fmt(f),
            Erreur::Evaluation(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Erreur {}
