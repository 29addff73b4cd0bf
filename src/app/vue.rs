// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Grille de touches de la calculatrice d’origine (SHIFT ... =)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::{AppCalc, Touche};

/* ------------------------ Couleurs (thème sombre) ------------------------ */

const FOND_AFFICHAGE: egui::Color32 = egui::Color32::from_rgb(50, 60, 50);
const FOND_TOUCHE: egui::Color32 = egui::Color32::from_rgb(60, 60, 60);
const COULEUR_ON: egui::Color32 = egui::Color32::from_rgb(240, 100, 100);
const COULEUR_SHIFT: egui::Color32 = egui::Color32::from_rgb(255, 220, 130);
const COULEUR_ALPHA: egui::Color32 = egui::Color32::from_rgb(255, 182, 193);
const COULEUR_DEL: egui::Color32 = egui::Color32::from_rgb(130, 210, 130);
const COULEUR_AC: egui::Color32 = egui::Color32::from_rgb(240, 160, 0);
const COULEUR_EGAL: egui::Color32 = egui::Color32::from_rgb(180, 190, 210);

/// Disposition : `None` = case vide.
const GRILLE: [[Option<Touche>; 5]; 8] = [
    [
        Some(Touche::Shift),
        Some(Touche::Alpha),
        None,
        Some(Touche::Mode),
        Some(Touche::On),
    ],
    [
        Some(Touche::Carre),
        Some(Touche::Cube),
        Some(Touche::PuissanceY),
        Some(Touche::Inverse),
        Some(Touche::Racine),
    ],
    [
        Some(Touche::Sin),
        Some(Touche::Cos),
        Some(Touche::Tan),
        Some(Touche::Hyp),
        Some(Touche::Log),
    ],
    [
        Some(Touche::Ln),
        Some(Touche::ParG),
        Some(Touche::ParD),
        Some(Touche::Negatif),
        Some(Touche::Rcl),
    ],
    [
        Some(Touche::Chiffre('7')),
        Some(Touche::Chiffre('8')),
        Some(Touche::Chiffre('9')),
        Some(Touche::Del),
        Some(Touche::Ac),
    ],
    [
        Some(Touche::Chiffre('4')),
        Some(Touche::Chiffre('5')),
        Some(Touche::Chiffre('6')),
        Some(Touche::Fois),
        Some(Touche::Divise),
    ],
    [
        Some(Touche::Chiffre('1')),
        Some(Touche::Chiffre('2')),
        Some(Touche::Chiffre('3')),
        Some(Touche::Plus),
        Some(Touche::Moins),
    ],
    [
        Some(Touche::Chiffre('0')),
        Some(Touche::Point),
        Some(Touche::Exp10),
        Some(Touche::Ans),
        Some(Touche::MPlus),
    ],
];

/// Couleur de fond d’une touche + texte noir si fond clair.
fn style_touche(t: Touche) -> (egui::Color32, bool) {
    match t {
        Touche::Shift => (COULEUR_SHIFT, true),
        Touche::Alpha => (COULEUR_ALPHA, true),
        Touche::On => (COULEUR_ON, false),
        Touche::Del => (COULEUR_DEL, true),
        Touche::Ac => (COULEUR_AC, true),
        Touche::Egal => (COULEUR_EGAL, true),
        _ => (FOND_TOUCHE, false),
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_touches(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(FOND_AFFICHAGE)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Ligne du haut : indicateur (gauche) + historique (droite)
                ui.horizontal(|ui| {
                    ui.monospace(self.indicateur());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(&self.historique);
                    });
                });

                // IMPORTANT : id stable + focus contrôlé
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.affichage)
                        .desired_width(ui.available_width())
                        .font(egui::TextStyle::Heading)
                        .id_salt("affichage_edit")
                        .code_editor(),
                );

                if self.focus_entree {
                    resp.request_focus();
                    self.focus_entree = false;
                }

                // --- Clavier : Enter évalue (seulement si le champ est focus) ---
                let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                if resp.has_focus() && enter {
                    self.calculer();
                }
            });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_touches(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("grille_touches")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in GRILLE {
                    for case in ligne {
                        match case {
                            Some(t) => self.bouton(ui, t, [64.0, 34.0]),
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);
        let largeur = ui.available_width();
        self.bouton(ui, Touche::Egal, [largeur, 40.0]);
    }

    fn bouton(&mut self, ui: &mut egui::Ui, t: Touche, taille: [f32; 2]) {
        let (fond, texte_noir) = style_touche(t);
        let mut texte = egui::RichText::new(t.libelle()).strong();
        if texte_noir {
            texte = texte.color(egui::Color32::BLACK);
        }

        let resp = ui.add_sized(taille, egui::Button::new(texte).fill(fond));
        if resp.clicked() {
            self.appuyer(t);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(
                    ui,
                    "Prétraité",
                    "demarche_pretraite",
                    &self.demarche.pretraite,
                );
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                ui.add_space(4.0);
                ui.monospace(format!("M = {}", self.moteur.memory()));
                ui.monospace(format!("Ans = {}", self.moteur.last_answer()));
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
