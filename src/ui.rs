use crate::light::{LightForm, LightKind};

/// Builds the light configuration panel. Returns true when Apply was clicked
/// this frame; the caller feeds the form to the scene and keeps the result.
pub fn light_panel(ctx: &egui::Context, form: &mut LightForm) -> bool {
    let mut apply = false;

    egui::Window::new("Light")
        .resizable(false)
        .default_pos(egui::pos2(10.0, 80.0))
        .show(ctx, |ui| {
            egui::ComboBox::from_label("Type")
                .selected_text(match form.kind {
                    LightKind::Ambient => "Ambient",
                    LightKind::Directional => "Directional",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut form.kind, LightKind::Ambient, "Ambient");
                    ui.selectable_value(&mut form.kind, LightKind::Directional, "Directional");
                });

            ui.separator();
            ui.label("Color (0-255)");
            ui.horizontal(|ui| {
                channel_field(ui, "R", &mut form.red);
                channel_field(ui, "G", &mut form.green);
                channel_field(ui, "B", &mut form.blue);
            });

            match form.kind {
                LightKind::Ambient => {
                    ui.horizontal(|ui| {
                        ui.label("Intensity");
                        ui.add(egui::TextEdit::singleline(&mut form.intensity).desired_width(48.0));
                    });
                }
                LightKind::Directional => {
                    ui.label("Sun position");
                    ui.horizontal(|ui| {
                        channel_field(ui, "X", &mut form.sun_x);
                        channel_field(ui, "Y", &mut form.sun_y);
                        channel_field(ui, "Z", &mut form.sun_z);
                    });
                    ui.label("Target position");
                    ui.horizontal(|ui| {
                        channel_field(ui, "X", &mut form.target_x);
                        channel_field(ui, "Y", &mut form.target_y);
                        channel_field(ui, "Z", &mut form.target_z);
                    });
                }
            }

            ui.separator();
            if ui.button("Apply").clicked() {
                apply = true;
            }
        });

    apply
}

fn channel_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(48.0));
}

/// Frame-rate overlay in the window corner.
pub fn fps_overlay(ctx: &egui::Context, fps: f32) {
    egui::Window::new("FPS")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{:.0} FPS", fps))
                    .size(20.0)
                    .color(egui::Color32::from_rgb(74, 158, 255)),
            );
        });
}
