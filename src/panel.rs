use three_d::{egui, Srgba};

use crate::log; // macro import
use crate::scene::{ObjectId, Scene};
use crate::toppings::ToppingManager;
use crate::utils::{srgba_from_hex, to_hex_string};


/// The values the panel edits
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    pub cream_color: Srgba,
}
impl Default for Options {
    fn default() -> Self {
        Self { cream_color: srgba_from_hex(0xFFFACD) }
    }
}


/// A user request coming out of the panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelAction {
    CreamColor(Srgba),
    AddCherry,
    AddSprinkles,
    RemoveToppings,
}


/// Read-only numbers shown under the controls
#[derive(Clone, Copy, Debug, Default)]
pub struct PanelStats {
    pub fps: f64,
    pub objects: usize,
    pub sprinkles: usize,
    pub pixel_ratio: f64,
}


/// Debug panel: one color picker and three topping buttons
pub struct ControlPanel {
    pub options: Options,
}
impl ControlPanel {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Draws the panel and returns what the user asked for this frame
    pub fn show(&mut self, gui_context: &egui::Context, stats: &PanelStats) -> Vec<PanelAction> {
        let mut actions = Vec::new();

        egui::Window::new("Sundae")
            .resizable(false)
            .show(gui_context, |ui| {
                egui::Grid::new("controls_grid")
                    .num_columns(2)
                    .spacing([40.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.add(egui::Label::new("Ice Cream Flavor"));
                        let c = self.options.cream_color;
                        let mut rgb = [c.r, c.g, c.b];
                        if ui.color_edit_button_srgb(&mut rgb).changed() {
                            self.options.cream_color = Srgba::new_opaque(rgb[0], rgb[1], rgb[2]);
                            actions.push(PanelAction::CreamColor(self.options.cream_color));
                        }
                        ui.end_row();

                        ui.add(egui::Label::new("FPS"));
                        ui.label(format!("{:.2}", stats.fps));
                        ui.end_row();

                        ui.add(egui::Label::new("Objects"));
                        ui.label(format!("{}", stats.objects));
                        ui.end_row();

                        ui.add(egui::Label::new("Sprinkles"));
                        ui.label(format!("{}", stats.sprinkles));
                        ui.end_row();

                        ui.add(egui::Label::new("Pixel Ratio"));
                        ui.label(format!("{:.2}", stats.pixel_ratio));
                        ui.end_row();
                    });

                ui.separator();
                if ui.button("Add Cherry").clicked() {
                    actions.push(PanelAction::AddCherry);
                }
                if ui.button("Add Sprinkles").clicked() {
                    actions.push(PanelAction::AddSprinkles);
                }
                if ui.button("Remove Toppings").clicked() {
                    actions.push(PanelAction::RemoveToppings);
                }
            });

        actions
    }
}


/// Shows accumulated errors in a centered window
pub fn show_error(gui_context: &egui::Context, msg: &str) {
    egui::Window::new("Error")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(gui_context, |ui| {
            ui.colored_label(egui::Color32::RED, msg);
        });
}


/// Carries out a panel action on the scene
pub fn apply(action: PanelAction, scene: &mut Scene, toppings: &mut ToppingManager, scoop: ObjectId) {
    match action {
        PanelAction::CreamColor(color) => {
            if let Some(object) = scene.get_mut(scoop) {
                object.color = color;
                log!("apply(): scoop color={}", to_hex_string(color));
            }
        }
        PanelAction::AddCherry => {
            toppings.add_cherry(scene);
        }
        PanelAction::AddSprinkles => {
            toppings.add_sprinkles(scene);
        }
        PanelAction::RemoveToppings => {
            toppings.remove_toppings(scene);
        }
    }
}
