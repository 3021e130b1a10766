//! Text overlays drawn with egui: live telemetry and the equations panel.
//!
//! Both are display-only; nothing here reacts to input.

use egui::{Color32, Context, RichText};

use crate::telemetry::Telemetry;

/// An equation with its name and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Width of the equations panel in points
pub const EQUATIONS_PANEL_WIDTH: f32 = 200.0;

/// Telemetry text size, matching an 18 px bitmap font
pub const TELEMETRY_FONT_SIZE: f32 = 18.0;

/// Draw the telemetry lines stacked from the top-left corner
pub fn draw_telemetry(ctx: &Context, telemetry: &Telemetry) {
    egui::Area::new(egui::Id::new("telemetry"))
        .fixed_pos(egui::pos2(8.0, 8.0))
        .interactable(false)
        .show(ctx, |ui| {
            for line in telemetry.lines() {
                ui.label(
                    RichText::new(line)
                        .size(TELEMETRY_FONT_SIZE)
                        .color(Color32::GREEN),
                );
            }
        });
}

/// Draw the equations sidebar
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
) {
    egui::SidePanel::right("equations_panel")
        .resizable(false)
        .exact_width(EQUATIONS_PANEL_WIDTH)
        .show(ctx, |ui| {
            ui.heading(RichText::new(title).color(Color32::LIGHT_BLUE));
            ui.separator();

            for eq in equations {
                ui.group(|ui| {
                    ui.label(RichText::new(eq.name).strong().color(Color32::YELLOW));
                    ui.label(RichText::new(eq.formula).monospace().color(Color32::WHITE));
                    ui.label(RichText::new(eq.description).small().italics());
                });
                ui.add_space(4.0);
            }

            ui.add_space(8.0);

            egui::Grid::new("variables_grid")
                .num_columns(2)
                .spacing([10.0, 4.0])
                .show(ui, |ui| {
                    for (symbol, meaning) in variables {
                        ui.label(RichText::new(*symbol).monospace().color(Color32::LIGHT_GREEN));
                        ui.label(*meaning);
                        ui.end_row();
                    }
                });
        });
}

// ============================================================================
// Coulomb Interaction Equations
// ============================================================================

pub const COULOMB_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Coulomb's Law",
        formula: "F = k·|q₁·q₂| / r²",
        description: "Like charges repel, opposite attract",
    },
    Equation {
        name: "Padded Separation",
        formula: "r = |x₂ - x₁| / s + w",
        description: "Gap in metres plus one sprite width",
    },
    Equation {
        name: "Damped Acceleration",
        formula: "a = ±F·s / m - γ·v",
        description: "Scaled force minus linear drag",
    },
    Equation {
        name: "Explicit Euler",
        formula: "v += a·Δt,  x += v·Δt",
        description: "One step per accepted frame",
    },
];

pub const COULOMB_VARIABLES: &[(&str, &str)] = &[
    ("k", "Coulomb constant (8.99×10⁹)"),
    ("q₁, q₂", "Charges (nC)"),
    ("x, v", "Position, velocity"),
    ("s", "Pixel scale (10⁻¹²)"),
    ("w", "Sprite width"),
    ("m", "Electron mass"),
    ("γ", "Friction coefficient"),
    ("Δt", "Timestep (0.01 s)"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Simulation;

    #[test]
    fn equations_and_variables_are_filled_in() {
        assert!(!COULOMB_EQUATIONS.is_empty());
        for eq in COULOMB_EQUATIONS {
            assert!(!eq.name.is_empty() && !eq.formula.is_empty());
        }
        assert!(COULOMB_VARIABLES.iter().any(|(symbol, _)| *symbol == "k"));
    }

    #[test]
    fn overlays_lay_out_without_a_gpu() {
        let ctx = Context::default();
        let telemetry = Telemetry::capture(&Simulation::default());

        let output = ctx.run(egui::RawInput::default(), |ctx| {
            draw_equations_sidebar(ctx, "Coulomb", COULOMB_EQUATIONS, COULOMB_VARIABLES);
            draw_telemetry(ctx, &telemetry);
        });

        assert!(!output.shapes.is_empty());
    }
}
