use eframe::egui::{ self, containers };

/// Zoom factor applied at startup; "Reset Zoom" returns to it.
pub const DEFAULT_ZOOM: f32 = 1.4;

const ZOOM_STEP: f32 = 0.1;
const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 2.0;

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, zoom: &mut f32) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Zoom In").clicked() {
                        *zoom = zoomed_in(*zoom);
                        ctx.set_zoom_factor(*zoom);
                    }
                    if ui.button("Zoom Out").clicked() {
                        *zoom = zoomed_out(*zoom);
                        ctx.set_zoom_factor(*zoom);
                    }
                    if ui.button("Reset Zoom").clicked() {
                        *zoom = DEFAULT_ZOOM;
                        ctx.set_zoom_factor(*zoom);
                    }
                });
            });
        });
    }
}

fn zoomed_in(zoom: f32) -> f32 {
    (zoom + ZOOM_STEP).min(MAX_ZOOM)
}

fn zoomed_out(zoom: f32) -> f32 {
    (zoom - ZOOM_STEP).max(MIN_ZOOM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_steps_stay_inside_the_limits() {
        let mut zoom = DEFAULT_ZOOM;
        for _ in 0..20 {
            zoom = zoomed_in(zoom);
        }
        assert_eq!(zoom, MAX_ZOOM);

        for _ in 0..40 {
            zoom = zoomed_out(zoom);
        }
        assert_eq!(zoom, MIN_ZOOM);
    }

    #[test]
    fn single_zoom_steps_move_by_one_increment() {
        assert!((zoomed_in(DEFAULT_ZOOM) - (DEFAULT_ZOOM + ZOOM_STEP)).abs() < 1e-6);
        assert!((zoomed_out(DEFAULT_ZOOM) - (DEFAULT_ZOOM - ZOOM_STEP)).abs() < 1e-6);
    }

    #[test]
    fn reset_target_sits_inside_the_limits() {
        assert!(MIN_ZOOM <= DEFAULT_ZOOM && DEFAULT_ZOOM <= MAX_ZOOM);
    }
}
