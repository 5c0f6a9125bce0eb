pub mod country_selector;
pub mod footer;
pub mod search_bar;
pub mod storefront_view;
pub mod window_chrome;

pub trait AppComponent {
    type Context;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui);
}
