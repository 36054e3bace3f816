use std::error::Error;

use druid::{AppLauncher, Widget, WindowDesc};
use plotters::coord::combinators::BindKeyPoints;
use plotters::prelude::full_palette::BLUE_600;
use plotters::prelude::*;
use plotters_druid::Plot;

use super::results_reader::StrategyRecord;

/// Distance between the centers of two neighbouring bars.
const BAR_SPACING: f64 = 0.5;
/// Width of one bar.
const BAR_WIDTH: f64 = 0.25;

/// Chart geometry derived from the parsed records. The number of bars
/// follows the record count instead of assuming a fixed ten.
struct ChartLayout {
    /// x-position of the i-th bar center, `i * BAR_SPACING`.
    positions: Vec<f64>,
    x_range: (f64, f64),
    /// Covers zero and every error-bar whisker, with padding.
    y_range: (f64, f64),
}

impl ChartLayout {
    fn from(records: &[StrategyRecord]) -> Self {
        let positions: Vec<f64> = (0..records.len())
            .map(|i| i as f64 * BAR_SPACING)
            .collect();
        let last = positions.last().copied().unwrap_or(0.0);
        let low = records
            .iter()
            .map(|record| record.mean - record.stddev)
            .fold(0.0f64, f64::min);
        let high = records
            .iter()
            .map(|record| record.mean + record.stddev)
            .fold(0.0f64, f64::max);
        let pad = (high - low).max(1.0) * 0.125;
        ChartLayout {
            positions,
            x_range: (-BAR_SPACING, last + BAR_SPACING),
            y_range: (low - pad, high + pad),
        }
    }
}

/// Maps an x-axis key point back to the strategy it belongs to.
fn label_at(x: f64, records: &[StrategyRecord]) -> String {
    let index = (x / BAR_SPACING).round();
    if index < 0.0 {
        return String::new();
    }
    records
        .get(index as usize)
        .map(|record| record.name.clone())
        .unwrap_or_default()
}

/// Opens a window with the bar chart and blocks until it is dismissed.
pub fn render_plot(records: Vec<StrategyRecord>) -> Result<(), Box<dyn Error>> {
    let main_window = WindowDesc::new(move || chart_builder(records))
        .title("Tournament results")
        .window_size((1280.0, 900.0))
        .resizable(true);

    AppLauncher::with_window(main_window)
        .launch(())
        .expect("launch failed");
    Ok(())
}

fn chart_builder(records: Vec<StrategyRecord>) -> impl Widget<()> {
    let layout = ChartLayout::from(&records);

    Plot::new(move |_size, _data, root| {
        root.fill(&WHITE).unwrap();

        // The chart will be put on the window
        let mut chart = ChartBuilder::on(root);

        // Shifting the chart away from the window borders
        chart.margin(20).set_left_and_bottom_label_area_size(45);

        // Pin the x-axis labels to the bar centers
        let x_axis =
            (layout.x_range.0..layout.x_range.1).with_key_points(layout.positions.clone());
        let mut chart_context = chart
            .build_cartesian_2d(x_axis, layout.y_range.0..layout.y_range.1)
            .unwrap();

        // Background grid, axis descriptions, and strategy names as ticks
        chart_context
            .configure_mesh()
            .x_labels(records.len() + 1)
            .x_label_formatter(&|x| label_at(*x, &records))
            .x_desc("Game strategies")
            .y_desc("Average score")
            .draw()
            .unwrap();

        // One bar per strategy, height equal to the mean
        chart_context
            .draw_series(records.iter().enumerate().map(|(i, record)| {
                let x = i as f64 * BAR_SPACING;
                Rectangle::new(
                    [(x - BAR_WIDTH / 2.0, 0.0), (x + BAR_WIDTH / 2.0, record.mean)],
                    BLUE_600.mix(0.8).filled(),
                )
            }))
            .unwrap();

        // Capped whiskers from mean - stddev to mean + stddev
        chart_context
            .draw_series(records.iter().enumerate().map(|(i, record)| {
                ErrorBar::new_vertical(
                    i as f64 * BAR_SPACING,
                    record.mean - record.stddev,
                    record.mean,
                    record.mean + record.stddev,
                    RED.filled(),
                    6,
                )
            }))
            .unwrap();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn records(values: &[(&str, f64, f64)]) -> Vec<StrategyRecord> {
        values
            .iter()
            .map(|&(name, mean, stddev)| StrategyRecord {
                name: name.to_string(),
                mean,
                stddev,
            })
            .collect()
    }

    #[test]
    fn test_positions_are_evenly_spaced() {
        let records = records(&[
            ("a", 1.0, 0.1),
            ("b", 2.0, 0.2),
            ("c", 3.0, 0.3),
            ("d", 4.0, 0.4),
        ]);
        let layout = ChartLayout::from(&records);

        assert_eq!(vec![0.0, 0.5, 1.0, 1.5], layout.positions);
        assert_relative_eq!(-0.5, layout.x_range.0);
        assert_relative_eq!(2.0, layout.x_range.1);
    }

    #[test]
    fn test_layout_follows_the_record_count() {
        let ten = records(&[("s", 1.0, 0.0); 10]);
        assert_eq!(10, ChartLayout::from(&ten).positions.len());

        let three = records(&[("s", 1.0, 0.0); 3]);
        assert_eq!(3, ChartLayout::from(&three).positions.len());
    }

    #[test]
    fn test_y_range_covers_whiskers_and_zero() {
        // Prisoner's dilemma totals are negative
        let records = records(&[("a", -10.0, 2.0), ("b", -4.0, 1.0)]);
        let layout = ChartLayout::from(&records);

        assert!(layout.y_range.0 < -12.0, "must cover mean - stddev");
        assert!(layout.y_range.1 > 0.0, "must cover the zero baseline");
    }

    #[test]
    fn test_label_at_maps_positions_to_names() {
        let records = records(&[("first", 1.0, 0.1), ("second", 2.0, 0.2)]);

        assert_eq!("first", label_at(0.0, &records));
        assert_eq!("second", label_at(0.5, &records));
        // Slight float drift still resolves to the nearest bar
        assert_eq!("second", label_at(0.4999, &records));
        // Positions outside the data stay unlabelled
        assert_eq!("", label_at(1.0, &records));
        assert_eq!("", label_at(-0.5, &records));
    }
}
