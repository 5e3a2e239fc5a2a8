//! Chart Plotter Module
//! Draws the doughnut chart with the egui painter and the monthly line
//! chart with egui_plot.

use crate::charts::{CategoryBreakdown, MonthlySeries, MONTH_LABELS};
use crate::data::Category;
use egui::{Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, Vec2};
use egui_plot::{GridMark, Line, Plot, PlotPoints, Points};
use std::f32::consts::TAU;

/// Color palette for categories, assigned in order of first appearance.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Line color for the monthly chart.
const MONTH_LINE_COLOR: Color32 = Color32::from_rgb(52, 152, 219);

/// Hole size of the doughnut, as a fraction of the outer radius.
const DOUGHNUT_CUTOUT: f32 = 0.6;

/// Angular resolution of a doughnut sector, radians per segment.
const SECTOR_STEP: f32 = 0.06;

/// Draws the two expense charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the category doughnut into a square region of the given size.
    ///
    /// `colors` is parallel to `breakdown.entries()`. With no records the
    /// region shows a "No Data" placeholder instead.
    pub fn draw_doughnut_chart(
        ui: &mut egui::Ui,
        breakdown: &CategoryBreakdown,
        colors: &[Color32],
        size: f32,
    ) {
        let (rect, _response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();

        if breakdown.is_empty() {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                "No Data",
                FontId::proportional(20.0),
                ui.visuals().weak_text_color(),
            );
            return;
        }

        let outer = size * 0.5 - 4.0;
        let inner = outer * DOUGHNUT_CUTOUT;
        let grand_total = breakdown.grand_total();

        // Start at twelve o'clock and sweep clockwise.
        let mut angle = -TAU / 4.0;
        for ((_, sum), &color) in breakdown.entries().iter().zip(colors) {
            let sweep = (*sum / grand_total) as f32 * TAU;
            Self::fill_ring_sector(&painter, center, inner, outer, angle, sweep, color);
            angle += sweep;
        }
    }

    /// Fill one ring sector as a fan of convex quads.
    fn fill_ring_sector(
        painter: &egui::Painter,
        center: Pos2,
        inner: f32,
        outer: f32,
        start: f32,
        sweep: f32,
        color: Color32,
    ) {
        let steps = (sweep / SECTOR_STEP).ceil().max(1.0) as usize;
        let at = |angle: f32, radius: f32| center + Vec2::new(angle.cos(), angle.sin()) * radius;

        for i in 0..steps {
            let a0 = start + sweep * i as f32 / steps as f32;
            let a1 = start + sweep * (i + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![at(a0, outer), at(a1, outer), at(a1, inner), at(a0, inner)],
                color,
                Stroke::NONE,
            ));
        }
    }

    /// Draw the legend for the doughnut: one color swatch per category.
    pub fn draw_category_legend(
        ui: &mut egui::Ui,
        entries: &[(Category, f64)],
        colors: &[Color32],
    ) {
        ui.horizontal_wrapped(|ui| {
            for ((category, _), &color) in entries.iter().zip(colors) {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), Sense::hover());
                ui.painter().rect_filled(rect, 3.0, color);
                ui.label(RichText::new(category.as_str()).size(12.0));
                ui.add_space(10.0);
            }
        });
    }

    /// Draw the monthly line chart: one point per calendar month, Jan..Dec,
    /// y axis clamped to include zero.
    pub fn draw_monthly_chart(ui: &mut egui::Ui, series: &MonthlySeries, height: f32) {
        let points: Vec<[f64; 2]> = series
            .totals()
            .iter()
            .enumerate()
            .map(|(month, &total)| [month as f64, total])
            .collect();

        Plot::new("monthly_expenses")
            .height(height)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .x_axis_label("Month")
            .y_axis_label("Amount")
            .include_y(0.0)
            .include_x(-0.5)
            .include_x(11.5)
            // One tick per month; the default spacer drops labels at this density.
            .x_grid_spacer(|_input| {
                (0..12)
                    .map(|month| GridMark {
                        value: month as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(|mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < MONTH_LABELS.len() {
                    MONTH_LABELS[idx].to_string()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(MONTH_LINE_COLOR)
                        .width(2.0)
                        .name("Expenses by Month"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(3.0)
                        .color(MONTH_LINE_COLOR),
                );
            });
    }
}
