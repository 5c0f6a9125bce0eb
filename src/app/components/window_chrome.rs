use super::AppComponent;
use crate::app::{t, App};
use eframe::egui::{self, Color32, RichText};

pub struct WindowChrome;

impl AppComponent for WindowChrome {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        ui.horizontal(|ui| {
            // Menu list
            ui.menu_button(t("shop"), |ui| {
                if ui.button(t("exit")).clicked() {
                    ctx.quit();
                    ui.close_menu();
                }
            });

            ui.menu_button(t("help"), |ui| {
                if ui.button(t("about")).clicked() {
                    ctx.show_about_dialog = true;
                    ui.close_menu();
                }
            });

            // Window operation buttons on the right, drag area in between
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button_size = egui::vec2(26.0, 18.0);
                let chrome_button = |text: &str| {
                    egui::Button::new(RichText::new(text).size(13.0))
                        .min_size(button_size)
                        .fill(Color32::TRANSPARENT)
                };

                if ui.add(chrome_button("✕")).clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }

                if ui.add(chrome_button("☐")).clicked() {
                    ui.ctx()
                        .send_viewport_cmd(egui::ViewportCommand::Maximized(!ctx.is_maximized));
                    ctx.is_maximized = !ctx.is_maximized;
                }

                if ui.add(chrome_button("–")).clicked() {
                    ui.ctx()
                        .send_viewport_cmd(egui::ViewportCommand::Minimized(true));
                }

                let title_bar_response =
                    ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());

                if title_bar_response.dragged() && !ctx.is_maximized {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::StartDrag);
                }
            });
        });
    }
}
