//! src/app/commandes.rs
//!
//! Méta-commandes de la ligne d’entrée (`:help`, `:const`, `:func`, `:quit`).
//! Reconnaissance + textes à afficher ; aucune évaluation d’expression ici.

use crate::noyau::format::formater_nombre;
use crate::noyau::tables::{CONSTANTES, FONCTIONS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commande {
    Quitter,
    Aide,
    Constantes,
    Fonctions,
    Inconnue(String),
}

impl Commande {
    /// `None` si la ligne n’est pas une méta-commande (pas de `:` en tête).
    pub fn analyser(ligne: &str) -> Option<Commande> {
        let l = ligne.trim();
        if !l.starts_with(':') {
            return None;
        }

        let c = match l.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => Commande::Quitter,
            ":help" | ":h" => Commande::Aide,
            ":const" => Commande::Constantes,
            ":func" => Commande::Fonctions,
            _ => Commande::Inconnue(l.to_string()),
        };
        Some(c)
    }
}

pub fn texte_aide() -> String {
    [
        "Exemples :",
        "  2+2*3",
        "  (1+2)^3/9",
        "  sqrt(2), log(100), ln(e), abs(-3.5)",
        "  sin(pi/2), cos(0), tan(pi/4)",
        "  max(3, 9), min(4, -2)",
        "  ans = dernier résultat, ex.: 1+ans",
        "Commandes : :quit, :help, :const, :func",
    ]
    .join("\n")
}

/// Une ligne par constante, valeur à `chiffres` chiffres significatifs.
pub fn texte_constantes(chiffres: usize) -> String {
    let mut out = String::from("Constantes :");
    for (nom, v) in CONSTANTES {
        out.push_str(&format!("\n  {nom} = {}", formater_nombre(v, chiffres)));
    }
    out
}

pub fn texte_fonctions() -> String {
    let sigs: Vec<String> = FONCTIONS.iter().map(|f| f.signature()).collect();
    format!("Fonctions : {}", sigs.join(", "))
}
