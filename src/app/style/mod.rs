use eframe::egui::{vec2, Button, Color32, Stroke, TextEdit};

pub trait ButtonExt {
    fn selector_style(self) -> Self;
}

impl ButtonExt for Button<'_> {
    fn selector_style(self) -> Self {
        self.min_size(vec2(160.0, 28.0))
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::new(1.0, Color32::GRAY))
            .corner_radius(5.0)
    }
}

pub trait TextEditExt {
    fn search_style(self) -> Self;
}

impl TextEditExt for TextEdit<'_> {
    fn search_style(self) -> Self {
        self.desired_width(180.0)
    }
}
