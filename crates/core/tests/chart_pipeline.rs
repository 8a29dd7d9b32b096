//! End-to-end pipeline: YAML lane sources through layout and projection to
//! render commands and SVG output.

use lanechart_core::dataset::{Dataset, parse_lane};
use lanechart_core::timefmt::date_ms;
use lanechart_core::views::bands::render_lanes;
use lanechart_core::{Chart, ChartStyle, LaneStyle, LayoutConfig, OrdinalScale, svg};
use lanechart_protocol::{RenderCommand, Viewport, palette};

const JOBS: &str = "\
- name: Video Store
  type: temporary
  start: 1999-06-01
  end: 1999-09-01
- name: Amazon
  type: employee
  start: 2001-03-01
  end: 2004-09-15
- name: Freelance
  shortName: FL
  type: freelance
  start: 2004-01-01
  end: present
";

const SCHOOLS: &str = "\
- name: University of Washington
  shortName: UW
  start: 1999-09-20
  end: 2003-06-10
- name: Night Classes
  start: 2004-02-01
";

fn style() -> ChartStyle {
    ChartStyle::new().with_lane(
        "Jobs",
        LaneStyle::scaled(
            "type",
            OrdinalScale::new(
                vec![
                    "employee".to_string(),
                    "freelance".to_string(),
                    "temporary".to_string(),
                ],
                vec![palette::LIGHT_GREEN, palette::ORANGE, palette::LIGHT_GRAY],
            ),
        ),
    )
}

fn load() -> Dataset {
    let now = date_ms(2010, 1, 1).unwrap_or_default();
    let jobs = parse_lane(JOBS, now).unwrap_or_default();
    let schools = parse_lane(SCHOOLS, now).unwrap_or_default();
    Dataset::from_lanes(vec![
        ("Jobs".to_string(), jobs),
        ("Schools".to_string(), schools),
    ])
}

fn viewport() -> Viewport {
    Viewport {
        x: 0.0,
        y: 0.0,
        width: 1200.0,
        height: 600.0,
        dpr: 1.0,
    }
}

#[test]
fn records_without_endpoints_never_reach_layout() {
    let dataset = load();
    // "Night Classes" has no end and is dropped at load, not errored.
    assert_eq!(dataset.lanes[1].1.len(), 1);
    let chart = Chart::new(&dataset, style(), LayoutConfig::default(), 1200.0)
        .unwrap_or_else(|e| unreachable!("{e}"));
    assert_eq!(chart.lanes()[1].bands.len(), 1);
}

#[test]
fn overlapping_jobs_stack_into_rows() {
    let chart = Chart::new(&load(), style(), LayoutConfig::default(), 1200.0)
        .unwrap_or_else(|e| unreachable!("{e}"));
    let jobs = &chart.lanes()[0];
    // Amazon [2001..2004-09] overlaps Freelance [2004-01..present].
    assert_eq!(jobs.rows, 2);
    let amazon = jobs.bands.iter().find(|b| b.name == "Amazon");
    let freelance = jobs.bands.iter().find(|b| b.name == "Freelance");
    assert_eq!(amazon.map(|b| b.row), Some(0));
    assert_eq!(freelance.map(|b| b.row), Some(1));
    // The video store ended before Amazon started, so it shares row 0.
    let video = jobs.bands.iter().find(|b| b.name == "Video Store");
    assert_eq!(video.map(|b| b.row), Some(0));
}

#[test]
fn full_extent_covers_both_lanes_and_present_resolution() {
    let chart = Chart::new(&load(), style(), LayoutConfig::default(), 1200.0)
        .unwrap_or_else(|e| unreachable!("{e}"));
    let (start, end) = chart.projection().domain();
    assert_eq!(start, date_ms(1999, 6, 1).unwrap_or_default());
    assert_eq!(end, date_ms(2010, 1, 1).unwrap_or_default());
}

#[test]
fn frame_commands_carry_scaled_colors() {
    let chart = Chart::new(&load(), style(), LayoutConfig::default(), 1200.0)
        .unwrap_or_else(|e| unreachable!("{e}"));
    let commands = render_lanes(
        chart.lanes(),
        chart.style(),
        chart.projection(),
        &viewport(),
    );
    let fills: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            RenderCommand::DrawRect { fill, .. } => Some(*fill),
            _ => None,
        })
        .collect();
    assert!(fills.contains(&palette::LIGHT_GREEN)); // employee
    assert!(fills.contains(&palette::ORANGE)); // freelance
    assert!(fills.contains(&palette::LIGHT_GRAY)); // temporary
    // Schools has no scale: second lane falls back to dark gray.
    assert!(fills.contains(&palette::LANE_GRAY_DARK));
}

#[test]
fn zoom_changes_projection_not_geometry() {
    let mut chart = Chart::new(&load(), style(), LayoutConfig::default(), 1200.0)
        .unwrap_or_else(|e| unreachable!("{e}"));
    let before = chart.lanes().to_vec();
    let focal = 600.0;
    let focal_time_before = chart.projection().unproject(focal);
    chart.zoom(8.0, focal);
    assert!((chart.projection().unproject(focal) - focal_time_before).abs() < 1e-6);
    assert_eq!(chart.lanes(), &before[..]);
}

#[test]
fn readout_precision_follows_zoom() {
    let mut chart = Chart::new(&load(), style(), LayoutConfig::default(), 1200.0)
        .unwrap_or_else(|e| unreachable!("{e}"));
    // Full extent is a decade: month + year.
    let wide = chart.readout(0.0);
    assert_eq!(wide, "June 1999");
    // Deep zoom tightens to a full timestamp.
    chart.zoom(500.0, 600.0);
    let tight = chart.readout(600.0);
    assert!(tight.contains(','), "expected full timestamp, got {tight}");
}

#[test]
fn svg_export_of_a_full_frame() {
    let chart = Chart::new(&load(), style(), LayoutConfig::default(), 1200.0)
        .unwrap_or_else(|e| unreachable!("{e}"));
    let vp = viewport();
    let commands = chart.render(&vp, Some(300.0));
    let svg = svg::render_svg(&commands, vp.width, vp.height);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"<g id="Jobs">"#));
    assert!(svg.contains("Amazon"));
    // Short name wins for the cramped school band only if it fits; the
    // tooltip title always carries the label.
    assert!(svg.contains("UW"));
}

#[test]
fn frame_serializes_for_transport() {
    let chart = Chart::new(&load(), style(), LayoutConfig::default(), 1200.0)
        .unwrap_or_else(|e| unreachable!("{e}"));
    let commands = chart.render(&viewport(), Some(300.0));
    let json = serde_json::to_string(&commands).expect("serialize frame");
    assert!(json.contains("DrawRect"));
    let back: Vec<RenderCommand> = serde_json::from_str(&json).expect("deserialize frame");
    assert_eq!(back.len(), commands.len());
}

#[test]
fn layout_is_deterministic_across_loads() {
    let a = Chart::new(&load(), style(), LayoutConfig::default(), 1200.0)
        .unwrap_or_else(|e| unreachable!("{e}"));
    let b = Chart::new(&load(), style(), LayoutConfig::default(), 1200.0)
        .unwrap_or_else(|e| unreachable!("{e}"));
    assert_eq!(a.lanes(), b.lanes());
}
