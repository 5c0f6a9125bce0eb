use super::AppComponent;
use crate::app::style::TextEditExt;
use crate::app::{t, App};
use eframe::egui;

/// Edits the route's `searchBy` query parameter. The draft lives on
/// the app so it survives relayouts; the route only changes when the
/// search is committed or cleared.
pub struct SearchBar;

impl AppComponent for SearchBar {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut ctx.search_draft)
                    .hint_text(t("search_hint"))
                    .search_style(),
            );

            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button("🔍").clicked() || submitted {
                ctx.commit_search();
            }

            let has_context = ctx.router.current().search_by().is_some();
            if has_context && ui.small_button(t("clear_search")).clicked() {
                ctx.clear_search();
            }
        });
    }
}
