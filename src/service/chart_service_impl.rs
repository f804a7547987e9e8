use crate::common::*;

use crate::model::burnup::{snapshot::*, timeseries::*};

use crate::enums::trend_outcome::*;

use crate::traits::service_traits::chart_service::*;

use crate::utils_modules::time_utils::*;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use std::ops::Range;

/* 6.4in x 4.8in at 150 dpi */
const CHART_SIZE: (u32, u32) = (960, 720);

const SCOPE_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const DONE_COLOR: RGBColor = RGBColor(0xff, 0x7f, 0x0e);
const PREDICTED_COLOR: RGBColor = RGBColor(0x2c, 0xa0, 0x2c);

const LINE_WIDTH: u32 = 3;
const MARKER_SIZE: u32 = 5;
const POINT_LABEL_SIZE: i32 = 13;
const FINAL_POINT_LABEL_SIZE: i32 = 18;
const FINISH_LABEL_SIZE: i32 = 16;

/* Tick interval used when the series has a single date */
const SINGLE_DATE_TICK_DAYS: f64 = 1200.0;
const Y_HEADROOM: f64 = 1.08;
const AXIS_MARGIN: f64 = 0.05;
const MAX_X_TICKS: usize = 10;

#[doc = "One plotted date with its numeric x position"]
#[derive(Debug, Clone, Copy)]
struct ChartPoint {
    x: f64,
    done: u64,
    scope: u64,
}

#[doc = "Forecast geometry handed to the drawing thread"]
#[derive(Debug, Clone)]
struct ForecastLine {
    current_x: f64,
    current_done: u64,
    current_scope: u64,
    finish_x: f64,
    finish_label: String,
}

#[doc = r#"
    Numeric date axis whose bold key points are the precomputed anchored ticks.
    Light mesh points are left out so only the date ticks are drawn.
"#]
#[derive(Debug, Clone)]
struct AnchoredDateAxis {
    range: Range<f64>,
    ticks: Vec<f64>,
}

impl AnchoredDateAxis {
    fn new(range: Range<f64>, ticks: Vec<f64>) -> Self {
        Self { range, ticks }
    }
}

impl Ranged for AnchoredDateAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let span: f64 = self.range.end - self.range.start;
        let pixels: i32 = limit.1 - limit.0;

        if span == 0.0 || pixels == 0 {
            return limit.1;
        }

        let ratio: f64 = (value - self.range.start) / span;
        limit.0 + (f64::from(pixels) * ratio + 1e-3).floor() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            return Vec::new();
        }

        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.range.clone()
    }
}

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "Every K-th point is labeled: K = 1 below six points, otherwise count / 5"]
    pub(crate) fn annotation_stride(point_count: usize) -> usize {
        if point_count > 5 {
            point_count / 5
        } else {
            1
        }
    }

    #[doc = r#"
        Indices of the labeled points, each paired with whether it is the emphasized final
        label. Walking in strides of K, the first index whose next stride would run past
        the end is replaced by the last point, so the last point is always labeled.
    "#]
    pub(crate) fn annotated_points(point_count: usize) -> Vec<(usize, bool)> {
        if point_count == 0 {
            return Vec::new();
        }

        let stride: usize = Self::annotation_stride(point_count);
        let last: usize = point_count - 1;
        let mut labeled: Vec<(usize, bool)> = Vec::new();

        let mut idx: usize = 0;
        while idx + stride <= last {
            labeled.push((idx, false));
            idx += stride;
        }
        labeled.push((last, true));

        labeled
    }

    #[doc = "Days between x ticks: a quarter of the span beyond 32 days, half of it otherwise"]
    pub(crate) fn tick_interval_days(first: NaiveDate, last: NaiveDate) -> f64 {
        let days_between: i64 = (last - first).num_days();

        if days_between <= 0 {
            SINGLE_DATE_TICK_DAYS
        } else if days_between > 32 {
            days_between as f64 / 4.0
        } else {
            days_between as f64 / 2.0
        }
    }

    #[doc = r#"
        Tick positions anchored at `anchor`, spaced by `interval`, inside `[lo, hi]`.
        When more than `MAX_X_TICKS` would fit (a far projected finish date), the interval
        is widened by a whole multiple so the ticks stay anchored.
    "#]
    pub(crate) fn tick_positions(anchor: f64, interval: f64, (lo, hi): (f64, f64)) -> Vec<f64> {
        if interval.is_nan() || interval <= 0.0 || lo > hi {
            return vec![anchor];
        }

        let steps = |interval: f64| -> (i64, i64) {
            (
                ((lo - anchor) / interval).ceil() as i64,
                ((hi - anchor) / interval).floor() as i64,
            )
        };

        let (first_step, last_step) = steps(interval);
        let tick_count: usize = (last_step - first_step + 1).max(0) as usize;
        let stride: usize = tick_count.div_ceil(MAX_X_TICKS).max(1);
        let interval: f64 = interval * stride as f64;

        let (first_step, last_step) = steps(interval);

        (first_step..=last_step)
            .map(|step| anchor + step as f64 * interval)
            .collect()
    }

    #[doc = "Data range padded by 5% on both sides (one unit when the range is flat)"]
    pub(crate) fn padded_range(values: &[f64]) -> (f64, f64) {
        let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if !min_val.is_finite() || !max_val.is_finite() {
            return (0.0, 1.0);
        }

        let span: f64 = max_val - min_val;
        let padding: f64 = if span > 0.0 { span * AXIS_MARGIN } else { 1.0 };

        (min_val - padding, max_val + padding)
    }

    #[doc = "Y range with the top raised by 8% to make room for the point labels"]
    pub(crate) fn calculate_y_range(&self, counts: &[u64]) -> (f64, f64) {
        let values: Vec<f64> = counts.iter().map(|count| *count as f64).collect();
        let (y_min, y_max) = Self::padded_range(&values);

        (y_min, y_max * Y_HEADROOM)
    }

    pub(crate) fn chart_file_name(render_date: NaiveDate) -> String {
        format!("burnup-{}.png", convert_date_to_str(render_date))
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_burnup_chart(
        &self,
        series: &Timeseries,
        outcome: &TrendOutcome,
        render_date: NaiveDate,
        output_dir: &std::path::Path,
    ) -> anyhow::Result<PathBuf> {
        let snapshots: Vec<Snapshot> = series.snapshots();

        let (first_date, last_date) = match (snapshots.first(), snapshots.last()) {
            (Some(first), Some(last)) => (first.date, last.date),
            _ => {
                return Err(anyhow!(
                    "[ChartServiceImpl->render_burnup_chart] Cannot generate chart with empty data"
                ));
            }
        };

        /* Create output directory if it doesn't exist */
        tokio::fs::create_dir_all(output_dir).await.with_context(|| {
            format!(
                "[ChartServiceImpl->render_burnup_chart] cannot create {:?}",
                output_dir
            )
        })?;

        let output_path: PathBuf = output_dir.join(Self::chart_file_name(render_date));
        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = format!("Burnup Chart {}", convert_date_to_str(render_date));

        let points: Vec<ChartPoint> = snapshots
            .iter()
            .map(|snapshot| ChartPoint {
                x: date_to_num(snapshot.date),
                done: snapshot.done,
                scope: snapshot.scope,
            })
            .collect();

        let forecast: Option<ForecastLine> = outcome.estimate().map(|estimate| ForecastLine {
            current_x: date_to_num(estimate.current.date),
            current_done: estimate.current.done,
            current_scope: estimate.current.scope,
            finish_x: estimate.projected_finish_days,
            finish_label: convert_date_to_month_day(estimate.projected_finish_date),
        });

        /* Calculate ranges before moving into closure */
        let mut x_values: Vec<f64> = points.iter().map(|p| p.x).collect();
        if let Some(line) = &forecast {
            x_values.push(line.finish_x);
        }
        let (x_min, x_max) = Self::padded_range(&x_values);

        let counts: Vec<u64> = points.iter().flat_map(|p| [p.done, p.scope]).collect();
        let (y_min, y_max) = self.calculate_y_range(&counts);

        let first_x: f64 = date_to_num(first_date);
        let ticks: Vec<f64> = Self::tick_positions(
            first_x,
            Self::tick_interval_days(first_date, last_date),
            (x_min, x_max),
        );

        let labeled_points: Vec<(usize, bool)> = Self::annotated_points(points.len());

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let root = BitMapBackend::new(&output_path_str, CHART_SIZE).into_drawing_area();
                root.fill(&WHITE)?;

                let mut chart = ChartBuilder::on(&root)
                    .caption(&title, ("sans-serif", 28).into_font())
                    .margin(20)
                    .x_label_area_size(40)
                    .y_label_area_size(40)
                    .build_cartesian_2d(AnchoredDateAxis::new(x_min..x_max, ticks), y_min..y_max)?;

                chart
                    .configure_mesh()
                    .disable_y_mesh()
                    .y_desc("Tasks")
                    .y_label_formatter(&|_| String::new())
                    .x_label_formatter(&|x| convert_num_to_month_day(*x))
                    .x_label_style(("sans-serif", 14).into_font())
                    .draw()?;

                if let Some(line) = &forecast {
                    let scope_y: f64 = line.current_scope as f64;

                    chart
                        .draw_series(DashedLineSeries::new(
                            vec![
                                (line.current_x, line.current_done as f64),
                                (line.finish_x, scope_y),
                            ],
                            10,
                            6,
                            PREDICTED_COLOR.stroke_width(LINE_WIDTH),
                        ))?
                        .label("Predicted")
                        .legend(|(x, y)| {
                            PathElement::new(
                                vec![(x, y), (x + 20, y)],
                                PREDICTED_COLOR.stroke_width(LINE_WIDTH),
                            )
                        });

                    /* scope held flat until the projected finish */
                    chart.draw_series(
                        LineSeries::new(
                            vec![(line.current_x, scope_y), (line.finish_x, scope_y)],
                            SCOPE_COLOR.stroke_width(LINE_WIDTH),
                        )
                        .point_size(MARKER_SIZE),
                    )?;

                    let label_style: TextStyle = ("sans-serif", FINISH_LABEL_SIZE)
                        .into_font()
                        .style(FontStyle::Bold)
                        .color(&PREDICTED_COLOR)
                        .pos(Pos::new(HPos::Right, VPos::Center));

                    /* lower-right corner of the plot area */
                    let anchor: (f64, f64) = (
                        x_min + 0.97 * (x_max - x_min),
                        y_min + 0.05 * (y_max - y_min),
                    );

                    chart.draw_series(std::iter::once(Text::new(
                        format!("Est. Finish Date: {}", line.finish_label),
                        anchor,
                        label_style,
                    )))?;
                }

                chart
                    .draw_series(
                        LineSeries::new(
                            points.iter().map(|p| (p.x, p.scope as f64)),
                            SCOPE_COLOR.stroke_width(LINE_WIDTH),
                        )
                        .point_size(MARKER_SIZE),
                    )?
                    .label("Scope")
                    .legend(|(x, y)| {
                        PathElement::new(
                            vec![(x, y), (x + 20, y)],
                            SCOPE_COLOR.stroke_width(LINE_WIDTH),
                        )
                    });

                chart
                    .draw_series(
                        LineSeries::new(
                            points.iter().map(|p| (p.x, p.done as f64)),
                            DONE_COLOR.stroke_width(LINE_WIDTH),
                        )
                        .point_size(MARKER_SIZE),
                    )?
                    .label("Done")
                    .legend(|(x, y)| {
                        PathElement::new(
                            vec![(x, y), (x + 20, y)],
                            DONE_COLOR.stroke_width(LINE_WIDTH),
                        )
                    });

                /* value labels above the points */
                for (idx, is_final) in labeled_points {
                    let point: ChartPoint = points[idx];
                    let size: i32 = if is_final {
                        FINAL_POINT_LABEL_SIZE
                    } else {
                        POINT_LABEL_SIZE
                    };

                    for (value, color) in [(point.done, DONE_COLOR), (point.scope, SCOPE_COLOR)] {
                        let style: TextStyle = ("sans-serif", size)
                            .into_font()
                            .style(FontStyle::Bold)
                            .color(&color)
                            .pos(Pos::new(HPos::Center, VPos::Bottom));

                        chart.draw_series(std::iter::once(
                            EmptyElement::at((point.x, value as f64))
                                + Text::new(value.to_string(), (-5, -9), style),
                        ))?;
                    }
                }

                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperLeft)
                    .background_style(&WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .draw()?;

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->render_burnup_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->render_burnup_chart] drawing/present failed")?;

        info!("Burnup chart generated successfully: {:?}", output_path);

        Ok(output_path)
    }
}
