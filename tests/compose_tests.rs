use ascii_chart::render::x_axis_ruler;
use ascii_chart::{ChartError, ComposeOptions, ConfigError, compose, compose_with};

#[test]
fn three_point_chart_with_ruler_and_caption() {
    let out = compose(&[1.0, 2.0, 3.0], 12.0).expect("compose");
    let expected = [
        "┤ ╭",
        "┤ │",
        "┤ │",
        "┤ │",
        "┤ │",
        "┤ │",
        "┤╭╯",
        "┤│",
        "┤│",
        "┤│",
        "┤│",
        "┤│",
        "┼╯",
        "   ",
        "$1.00 - $3.00 (200.00%)",
    ]
    .join("\n");
    assert_eq!(out, expected);
}

#[test]
fn caption_is_the_last_line() {
    let out = compose(&[1.0, 2.0, 3.0], 12.0).expect("compose");
    assert_eq!(out.lines().last(), Some("$1.00 - $3.00 (200.00%)"));
}

#[test]
fn ruler_line_matches_sample_count() {
    let samples: Vec<f64> = (1..=14).map(f64::from).collect();
    let out = compose(&samples, 4.0).expect("compose");
    let lines: Vec<&str> = out.split('\n').collect();
    let ruler = lines[lines.len() - 2];
    assert_eq!(ruler, "  12    6     ");
    assert_eq!(ruler, x_axis_ruler(14, 6));
    assert_eq!(lines[lines.len() - 1], "$1.00 - $14.00 (1300.00%)");
}

#[test]
fn large_amounts_get_thousands_separators() {
    let out = compose(&[12_500.0, 10_000.0, 11_250.5], 3.0).expect("compose");
    assert_eq!(
        out.lines().last(),
        Some("$10,000.00 - $12,500.00 (25.00%)")
    );
}

#[test]
fn custom_interval_and_currency() {
    let opts = ComposeOptions {
        height: 2.0,
        tick_interval: 2,
        currency: "S$".into(),
    };
    let out = compose_with(&[2.0, 4.0, 3.0, 2.0], &opts).expect("compose");
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines[lines.len() - 2], "4 2 ");
    assert_eq!(lines[lines.len() - 1], "S$2.00 - S$4.00 (100.00%)");
}

#[test]
fn zero_minimum_is_a_division_by_zero() {
    assert_eq!(compose(&[0.0, 1.0, 2.0], 12.0), Err(ChartError::DivisionByZero));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(compose(&[], 12.0), Err(ChartError::EmptyInput));
}

#[test]
fn missing_values_are_not_accepted() {
    assert!(matches!(
        compose(&[1.0, f64::NAN, 3.0], 12.0),
        Err(ChartError::NonFiniteSample { index: 1, .. })
    ));
    assert!(matches!(
        compose(&[1.0, f64::INFINITY], 12.0),
        Err(ChartError::NonFiniteSample { index: 1, .. })
    ));
}

#[test]
fn bad_options_surface_as_config_errors() {
    let opts = ComposeOptions {
        tick_interval: 0,
        ..ComposeOptions::default()
    };
    assert_eq!(
        compose_with(&[1.0, 2.0], &opts),
        Err(ChartError::Config(ConfigError::InvalidTickInterval))
    );
    assert!(matches!(
        compose(&[1.0, 2.0], -3.0),
        Err(ChartError::Config(ConfigError::InvalidHeight(_)))
    ));
}

#[test]
fn flat_balance_renders_one_row() {
    let out = compose(&[5.0, 5.0, 5.0], 12.0).expect("compose");
    assert_eq!(out, "┼──\n   \n$5.00 - $5.00 (0.00%)");
}
