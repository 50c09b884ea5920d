// src/noyau/tables.rs
//
// Tables fixes du noyau : opérateurs, fonctions, constantes.
// Données en lecture seule, compilées dans le binaire.

use std::f64::consts;

use super::erreur::ErreurEvaluation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Opérateurs reconnus.
///
/// Les formes unaires sont des identités distinctes des binaires,
/// même si elles partagent le symbole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    MoinsUnaire,
    PlusUnaire,
}

impl Operateur {
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
            Operateur::MoinsUnaire | Operateur::PlusUnaire => 4,
        }
    }

    pub fn associativite(self) -> Associativite {
        match self {
            Operateur::Puissance | Operateur::MoinsUnaire | Operateur::PlusUnaire => {
                Associativite::Droite
            }
            _ => Associativite::Gauche,
        }
    }

    pub fn est_unaire(self) -> bool {
        matches!(self, Operateur::MoinsUnaire | Operateur::PlusUnaire)
    }

    /// Symbole d’affichage. Les unaires sont préfixés par `u` pour les
    /// distinguer dans une RPN.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
            Operateur::Puissance => "^",
            Operateur::MoinsUnaire => "u-",
            Operateur::PlusUnaire => "u+",
        }
    }

    /// Applique un unaire. Renvoie `b` tel quel pour un binaire (non appelé).
    pub fn appliquer_unaire(self, b: f64) -> f64 {
        match self {
            Operateur::MoinsUnaire => -b,
            _ => b,
        }
    }

    /// Applique un binaire `a op b`.
    /// La division par zéro est vérifiée par l’évaluateur AVANT cet appel.
    pub fn appliquer_binaire(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
            Operateur::Puissance => a.powf(b),
            Operateur::MoinsUnaire | Operateur::PlusUnaire => self.appliquer_unaire(b),
        }
    }
}

/// Fonctions nommées (arité fixe).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log,
    Ln,
    Abs,
    Floor,
    Ceil,
    Round,
    Max,
    Min,
}

/// Ordre d’affichage (:func, boutons).
pub const FONCTIONS: [Fonction; 12] = [
    Fonction::Sin,
    Fonction::Cos,
    Fonction::Tan,
    Fonction::Sqrt,
    Fonction::Log,
    Fonction::Ln,
    Fonction::Abs,
    Fonction::Floor,
    Fonction::Ceil,
    Fonction::Round,
    Fonction::Max,
    Fonction::Min,
];

impl Fonction {
    /// Recherche par nom (déjà en minuscules).
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        FONCTIONS.iter().copied().find(|f| f.nom() == nom)
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Sqrt => "sqrt",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Abs => "abs",
            Fonction::Floor => "floor",
            Fonction::Ceil => "ceil",
            Fonction::Round => "round",
            Fonction::Max => "max",
            Fonction::Min => "min",
        }
    }

    pub fn arite(self) -> usize {
        match self {
            Fonction::Max | Fonction::Min => 2,
            _ => 1,
        }
    }

    /// `args` est dans l’ordre source et contient au moins `arite()` valeurs.
    pub fn appliquer(self, args: &[f64]) -> Result<f64, ErreurEvaluation> {
        let manque = || ErreurEvaluation::ArgumentsInsuffisants {
            fonction: self.nom().to_string(),
            attendus: self.arite(),
        };
        if args.len() < self.arite() {
            return Err(manque());
        }

        let x = args[0];
        let v = match self {
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Sqrt => {
                if x < 0.0 {
                    return Err(ErreurEvaluation::Domaine {
                        fonction: self.nom().to_string(),
                    });
                }
                x.sqrt()
            }
            Fonction::Log => x.log10(),
            Fonction::Ln => x.ln(),
            Fonction::Abs => x.abs(),
            Fonction::Floor => x.floor(),
            Fonction::Ceil => x.ceil(),
            // demi-valeurs loin de zéro (2.5 -> 3, -2.5 -> -3)
            Fonction::Round => x.round(),
            Fonction::Max => {
                let y = args[1];
                if x > y {
                    x
                } else {
                    y
                }
            }
            Fonction::Min => {
                let y = args[1];
                if x < y {
                    x
                } else {
                    y
                }
            }
        };
        Ok(v)
    }

    /// Signature lisible : `sin(x)`, `max(a,b)`.
    pub fn signature(self) -> String {
        if self.arite() == 2 {
            format!("{}(a,b)", self.nom())
        } else {
            format!("{}(x)", self.nom())
        }
    }
}

/// Identifiant réservé : résultat précédent.
pub const ANS: &str = "ans";

/// Constantes nommées.
pub const CONSTANTES: [(&str, f64); 2] = [("pi", consts::PI), ("e", consts::E)];

pub fn constante(nom: &str) -> Option<f64> {
    CONSTANTES
        .iter()
        .find(|(n, _)| *n == nom)
        .map(|(_, v)| *v)
}
