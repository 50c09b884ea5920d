//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, `ans`,
//! historique, précision d’affichage, démarche) et offrir des opérations
//! simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (voir session.rs).
//! - `ans` ne change que sur un résultat accepté (ou AC).
//! - Bornes sur la précision et sur l’historique.

/// Précision d’affichage par défaut (chiffres significatifs, comme `%.15g`).
pub const CHIFFRES_DEFAUT: usize = 15;

/// Au-delà de 17 chiffres, un f64 n’a plus rien à dire.
pub const CHIFFRES_MAX: usize = 17;

/// Garde-fou : nombre de lignes gardées dans l’historique.
pub const HISTORIQUE_MAX: usize = 50;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Une ligne acceptée : texte saisi + valeur obtenue.
#[derive(Clone, Debug, PartialEq)]
pub struct Ligne {
    pub expression: String,
    pub valeur: f64,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // "= 8"
    pub erreur: String,   // "Erreur: division par zéro"
    pub message: String,  // sortie des méta-commandes (:help, :const, :func)

    // --- session ---
    pub ans: f64,
    pub historique: Vec<Ligne>,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub chiffres: usize,

    // --- UX ---
    pub focus_entree: bool,
    /// Demandé par `:quit` ; app.rs ferme la fenêtre.
    pub quitter: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            message: String::new(),
            ans: 0.0,
            historique: Vec::new(),
            demarche: Demarche::default(),
            chiffres: CHIFFRES_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            quitter: false,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + ans + historique + précision).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.ans = 0.0;
        self.historique.clear();
        self.chiffres = CHIFFRES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + message + démarche (ans conservé).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.message.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - `ans` n’est jamais touché.
    /// - La démarche est effacée (non fiable si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.message.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat accepté, qui devient le nouvel `ans`.
    pub fn set_resultat(&mut self, expression: &str, valeur: f64, texte: String, demarche: Demarche) {
        self.erreur.clear();
        self.message.clear();
        self.resultat = texte;
        self.demarche = demarche;
        self.ans = valeur;

        self.historique.push(Ligne {
            expression: expression.to_string(),
            valeur,
        });
        if self.historique.len() > HISTORIQUE_MAX {
            let trop = self.historique.len() - HISTORIQUE_MAX;
            self.historique.drain(..trop);
        }

        self.focus_entree = true;
    }

    /// Utilitaire : sortie d’une méta-commande (n’affecte ni ans ni résultat).
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.erreur.clear();
        self.message = msg.into();
        self.focus_entree = true;
    }

    /// Garde-fou : limite la précision à 1..=CHIFFRES_MAX.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.clamp(1, CHIFFRES_MAX);
        self.focus_entree = true;
    }
}
