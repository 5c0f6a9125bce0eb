use super::AppComponent;
use crate::app::{t, version_info, App};
use eframe::egui;

pub struct Footer;

impl AppComponent for Footer {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!(
                "{}{}",
                t("route_label"),
                ctx.router.current().to_path()
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format!(
                    "{} · {}",
                    ctx.get_language().name(),
                    version_info::formatted_version()
                ));
            });
        });
    }
}
