//! src/app/session.rs
//!
//! Soumission d’une ligne : méta-commande ou évaluation via le noyau.
//! Le noyau est pur ; c’est ici que `ans` est reporté d’une ligne à l’autre.

use log::{info, warn};

use super::commandes::{texte_aide, texte_constantes, texte_fonctions, Commande};
use super::etat::{AppCalc, Demarche};
use crate::noyau::{eval_detaillee, formater_nombre};

impl AppCalc {
    /// Soumet le contenu de l’entrée.
    pub fn soumettre(&mut self) {
        let ligne = self.entree.clone();
        self.soumettre_ligne(&ligne);
    }

    /// Ligne vide : ignorée. `:...` : méta-commande. Sinon : évaluation avec `ans`.
    pub fn soumettre_ligne(&mut self, ligne: &str) {
        let s = ligne.trim();
        if s.is_empty() {
            self.focus_entree = true;
            return;
        }

        if let Some(cmd) = Commande::analyser(s) {
            self.executer_commande(cmd);
            return;
        }

        match eval_detaillee(s, self.ans) {
            Ok(ev) => {
                let texte = format!("= {}", formater_nombre(ev.valeur, self.chiffres));
                info!("{s} {texte}");
                let d = Demarche {
                    jetons: ev.demarche.jetons,
                    rpn: ev.demarche.rpn,
                };
                self.set_resultat(s, ev.valeur, texte, d);
            }
            Err(e) => {
                warn!("ligne rejetée ({}) : {s:?} : {e}", e.etape());
                self.set_erreur(format!("Erreur: {e}"));
            }
        }
    }

    fn executer_commande(&mut self, cmd: Commande) {
        match cmd {
            Commande::Quitter => {
                info!("fin de session demandée");
                self.quitter = true;
            }
            Commande::Aide => self.set_message(texte_aide()),
            Commande::Constantes => self.set_message(texte_constantes(self.chiffres)),
            Commande::Fonctions => self.set_message(texte_fonctions()),
            Commande::Inconnue(c) => {
                self.set_erreur(format!("Commande inconnue : {c}. Utilisez :help"))
            }
        }
    }
}
