// src/app.rs
//
// Calculatrice RPN — module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat, commandes, session, vue)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion Enter est faite dans vue.rs (quand le champ a le focus).

pub mod commandes;
pub mod etat;
pub mod session;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement l’entrée (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        // :quit (sans effet en web : l’onglet reste ouvert)
        if self.quitter {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
