use eframe::egui;

use super::{catalog, App};
use crate::app::components::{
    country_selector::CountrySelector, footer::Footer, search_bar::SearchBar,
    storefront_view::StorefrontView, window_chrome::WindowChrome, AppComponent,
};
use crate::app::{i18n, t, version_info};

impl eframe::App for App {
    fn on_exit(&mut self, _ctx: Option<&eframe::glow::Context>) {
        tracing::info!("exiting and saving");
        self.save_state();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Keep the global phrase table in step with the routed language
        if i18n::get_language() != self.current_language {
            i18n::set_language(self.current_language);
        }

        // Window title follows the selected storefront
        let options = self.catalog.options();
        if let Some(option) =
            catalog::selected_option(&options, self.router.current().country_code())
        {
            let display = format!("{} [ Shopwindow ]", option.name);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(display));
        }

        // Add window chrome at the top
        egui::TopBottomPanel::top("Window Chrome")
            .show_separator_line(true)
            .show(ctx, |ui| {
                WindowChrome::add(self, ui);
            });

        egui::TopBottomPanel::top("Storefront Header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                CountrySelector::add(self, ui);
                ui.separator();
                SearchBar::add(self, ui);
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("Footer").show(ctx, |ui| {
            Footer::add(self, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            StorefrontView::add(self, ui);
        });

        if self.show_about_dialog {
            let mut open = self.show_about_dialog;
            egui::Window::new(t("about"))
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.heading(t("app_name"));
                    ui.label(t("app_description"));
                    ui.add_space(8.0);
                    ui.weak(version_info::formatted_version());
                });
            self.show_about_dialog = open;
        }
    }
}
