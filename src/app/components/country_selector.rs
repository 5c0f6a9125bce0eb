use super::AppComponent;
use crate::app::router::Route;
use crate::app::style::ButtonExt;
use crate::app::{catalog, t, App};
use eframe::egui::{self, vec2, RichText};

// Flags ship at 200x50 intrinsic and are displayed width-constrained
const FLAG_DISPLAY_WIDTH: f32 = 28.0;
const MENU_MIN_WIDTH: f32 = 180.0;
// Matches the ~100ms ease of the list reveal
const MENU_FADE_SECS: f32 = 0.1;

/// What happened to the dropdown this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuEvent {
    ToggleClicked,
    RowClicked,
    PointerLeft,
}

/// The selector's whole state machine: Closed <-> Open. A row click or
/// the pointer leaving the open menu always lands on Closed.
pub(crate) fn transition(is_open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::ToggleClicked => !is_open,
        MenuEvent::RowClicked | MenuEvent::PointerLeft => false,
    }
}

pub struct CountrySelector;

impl AppComponent for CountrySelector {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        // Derived fresh every frame; the catalog is the only identity
        let options = ctx.catalog.options();
        let route = ctx.router.current().clone();
        let selected = catalog::selected_option(&options, route.country_code());
        let shown = catalog::display_option(&options, route.country_code());

        let chevron = if ctx.is_selector_open { "⏶" } else { "⏷" };
        let label = format!("{}: ", t("shipping_to"));

        let button = match shown {
            Some(option) => egui::Button::image_and_text(
                egui::Image::from_uri(&option.image_url).max_width(FLAG_DISPLAY_WIDTH),
                RichText::new(format!("{}{}", label, chevron)),
            ),
            // Empty catalog: placeholder glyph, nothing selectable below
            None => egui::Button::new(RichText::new(format!("🌐 {}{}", label, chevron))),
        };

        let response = ui.add(button.selector_style());
        // Expanded state is reported from the live boolean, not a constant
        response.widget_info(|| {
            egui::WidgetInfo::selected(
                egui::WidgetType::Button,
                true,
                ctx.is_selector_open,
                t("shipping_to"),
            )
        });

        if response.clicked() {
            ctx.is_selector_open = transition(ctx.is_selector_open, MenuEvent::ToggleClicked);
        }

        let openness = ui.ctx().animate_bool_with_time(
            ui.id().with("selector_openness"),
            ctx.is_selector_open,
            MENU_FADE_SECS,
        );

        if openness <= 0.0 {
            return;
        }

        let menu_pos = response.rect.left_bottom() + vec2(0.0, 4.0);
        let area = egui::Area::new(ui.id().with("selector_menu"))
            .order(egui::Order::Foreground)
            .fixed_pos(menu_pos)
            .show(ui.ctx(), |ui| {
                ui.set_opacity(openness);
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(MENU_MIN_WIDTH);

                    if options.is_empty() {
                        ui.weak(t("no_countries"));
                        return;
                    }

                    for option in &options {
                        let is_selected =
                            selected.map(|sel| sel.value.as_str()) == Some(option.value.as_str());

                        ui.horizontal(|ui| {
                            ui.add(
                                egui::Image::from_uri(&option.image_url)
                                    .max_width(FLAG_DISPLAY_WIDTH),
                            );

                            let name = if is_selected {
                                RichText::new(&option.name).strong()
                            } else {
                                RichText::new(&option.name)
                            };

                            if ui.selectable_label(is_selected, name).clicked() {
                                let destination = Route::storefront(
                                    &option.value,
                                    &option.default_locale,
                                    route.search_by(),
                                );
                                ctx.navigate(destination);
                                ctx.is_selector_open =
                                    transition(ctx.is_selector_open, MenuEvent::RowClicked);
                            }

                            if is_selected {
                                ui.label(RichText::new("✔").strong());
                            }
                        });
                    }
                });
            });

        // Mouse-leave close: pointer over neither the button nor the list
        if ctx.is_selector_open {
            let pointer_over =
                response.contains_pointer() || area.response.contains_pointer();
            if !pointer_over {
                ctx.is_selector_open = transition(ctx.is_selector_open, MenuEvent::PointerLeft);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_then_closes() {
        let open = transition(false, MenuEvent::ToggleClicked);
        assert!(open);

        let closed = transition(open, MenuEvent::ToggleClicked);
        assert!(!closed);
    }

    #[test]
    fn double_toggle_restores_state() {
        for initial in [false, true] {
            let after = transition(
                transition(initial, MenuEvent::ToggleClicked),
                MenuEvent::ToggleClicked,
            );
            assert_eq!(after, initial);
        }
    }

    #[test]
    fn row_click_always_closes() {
        assert!(!transition(true, MenuEvent::RowClicked));
        assert!(!transition(false, MenuEvent::RowClicked));
    }

    #[test]
    fn pointer_leave_closes() {
        assert!(!transition(true, MenuEvent::PointerLeft));
    }
}
