use super::AppComponent;
use crate::app::{catalog, t, tf, App};
use eframe::egui::{self, RichText};

const HERO_FLAG_WIDTH: f32 = 120.0;

/// Central panel: a read-only projection of the current route against
/// the catalog. Shows which storefront the user is in, its locale and
/// any active search context.
pub struct StorefrontView;

impl AppComponent for StorefrontView {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        let options = ctx.catalog.options();
        let route = ctx.router.current().clone();
        let selected = catalog::selected_option(&options, route.country_code());

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);

            match selected {
                Some(option) => {
                    ui.add(
                        egui::Image::from_uri(&option.image_url).max_width(HERO_FLAG_WIDTH),
                    );
                    ui.add_space(12.0);
                    ui.heading(tf("welcome", &[option.name.as_str()]));
                    ui.add_space(4.0);
                    ui.label(format!(
                        "{}{}",
                        t("locale_label"),
                        option.default_locale
                    ));
                }
                None => {
                    ui.heading(RichText::new("🌐").size(48.0));
                    ui.add_space(12.0);
                    ui.label(t("pick_country"));
                }
            }

            ui.add_space(16.0);
            match route.search_by() {
                Some(query) => {
                    ui.label(format!("{}{}", t("search_label"), query));
                }
                None => {
                    ui.weak(t("no_search"));
                }
            }
        });
    }
}
