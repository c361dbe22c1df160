//! Bar Chart Component
//!
//! Categorical bar chart using HTML5 Canvas: one bar per category, rotated
//! x-axis labels, and a linear y-axis starting at zero.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas margins; the bottom leaves room for the rotated labels.
const MARGIN_LEFT: f64 = 55.0;
const MARGIN_RIGHT: f64 = 15.0;
const MARGIN_TOP: f64 = 15.0;
const MARGIN_BOTTOM: f64 = 80.0;

/// Categorical bar chart component
#[component]
pub fn BarChart(
    /// (label, value) pairs, one bar each, drawn in order
    #[prop(into)]
    bars: Signal<Vec<(String, f64)>>,
    /// Bar fill color
    #[prop(default = "#60a5fa")]
    fill: &'static str,
    /// Use whole-number y-axis ticks (for counts)
    #[prop(default = false)]
    integer_axis: bool,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the bars change
    create_effect(move |_| {
        let bars = bars.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &bars, fill, integer_axis);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="480"
            height="320"
            class="w-full rounded-lg"
        />
    }
}

/// Pick the y-axis ceiling and the number of grid divisions.
///
/// Integer axes put every tick on a whole number: the ceiling is the next
/// whole number with one division per unit, or the next multiple of 5 with
/// five divisions once counts outgrow that. Continuous axes get five
/// divisions with 10% headroom. Empty or all-zero data gets a unit axis so
/// the grid still draws.
fn axis_layout(max_value: f64, integer_axis: bool) -> (f64, u32) {
    if !(max_value > 0.0) {
        return (1.0, if integer_axis { 1 } else { 5 });
    }
    if integer_axis {
        let top = max_value.ceil();
        if top <= 5.0 {
            (top, top as u32)
        } else {
            ((top / 5.0).ceil() * 5.0, 5)
        }
    } else {
        (max_value * 1.1, 5)
    }
}

/// Draw the bars on canvas
fn draw_bars(
    canvas: &HtmlCanvasElement,
    bars: &[(String, f64)],
    fill: &str,
    integer_axis: bool,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if bars.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No data to display", width / 2.0, height / 2.0);
        ctx.set_text_align("start");
        return;
    }

    let max_value = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let (y_max, divisions) = axis_layout(max_value, integer_axis);

    // Horizontal grid lines and y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");

    for i in 0..=divisions {
        let fraction = i as f64 / divisions as f64;
        let y = MARGIN_TOP + fraction * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - fraction * y_max;
        let label = if integer_axis {
            format!("{:.0}", value)
        } else {
            format!("{:.1}", value)
        };
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&label, MARGIN_LEFT - 8.0, y + 4.0);
    }

    // Bars, one slot per category
    let slot_width = chart_width / bars.len() as f64;
    let bar_width = slot_width * 0.6;

    ctx.set_fill_style(&fill.into());
    for (i, (_, value)) in bars.iter().enumerate() {
        let bar_height = (value / y_max) * chart_height;
        let x = MARGIN_LEFT + i as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let y = MARGIN_TOP + chart_height - bar_height;
        ctx.fill_rect(x, y, bar_width, bar_height);
    }

    // Rotated category labels under each bar
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");

    for (i, (label, _)) in bars.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot_width + slot_width / 2.0;
        let y = MARGIN_TOP + chart_height + 14.0;

        ctx.save();
        let _ = ctx.translate(x, y);
        let _ = ctx.rotate(-std::f64::consts::FRAC_PI_4);
        let _ = ctx.fill_text(label, 0.0, 0.0);
        ctx.restore();
    }

    ctx.set_text_align("start");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_layout_small_counts_one_division_per_unit() {
        assert_eq!(axis_layout(3.0, true), (3.0, 3));
        assert_eq!(axis_layout(4.2, true), (5.0, 5));
    }

    #[test]
    fn test_axis_layout_large_counts_snap_to_multiple_of_five() {
        assert_eq!(axis_layout(6.0, true), (10.0, 5));
        assert_eq!(axis_layout(12.0, true), (15.0, 5));
    }

    #[test]
    fn test_axis_layout_integer_ticks_are_whole_numbers() {
        for max in [1.0, 2.0, 3.7, 4.2, 6.0, 9.0, 13.0, 47.0] {
            let (y_max, divisions) = axis_layout(max, true);
            for i in 0..=divisions {
                let tick = y_max * i as f64 / divisions as f64;
                assert!(
                    (tick - tick.round()).abs() < 1e-9,
                    "fractional tick {} for max {}",
                    tick,
                    max
                );
            }
        }
    }

    #[test]
    fn test_axis_layout_continuous_adds_headroom() {
        let (y_max, divisions) = axis_layout(100.0, false);
        assert!((y_max - 110.0).abs() < 1e-9);
        assert_eq!(divisions, 5);
    }

    #[test]
    fn test_axis_layout_degenerate_is_unit() {
        assert_eq!(axis_layout(0.0, true), (1.0, 1));
        assert_eq!(axis_layout(0.0, false), (1.0, 5));
        assert_eq!(axis_layout(f64::NEG_INFINITY, false), (1.0, 5));
    }
}
