//! End-to-end rendering checks.

use collatz_core::sorted_pairs;
use collatz_plot::{PlotConfig, ScatterPlot, LABEL_WIDTH};
use proptest::prelude::*;

/// Marker columns per row label, counted from the axis bar.
fn marker_columns(plot: &str) -> Vec<(u32, Vec<usize>)> {
    plot.lines()
        .filter_map(|line| {
            let (label, data) = line.split_once('|')?;
            let length = label.trim().parse().ok()?;
            let columns = data
                .char_indices()
                .filter(|&(_, c)| c == 'O')
                .map(|(i, _)| i + 1)
                .collect();
            Some((length, columns))
        })
        .collect()
}

#[test]
fn five_seed_scenario() {
    let pairs = sorted_pairs(5);
    let plot = ScatterPlot::new(&pairs, 5).to_string();

    assert_eq!(
        marker_columns(&plot),
        vec![
            (7, vec![3]),
            (6, vec![]),
            (5, vec![5]),
            (4, vec![]),
            (3, vec![]),
            (2, vec![4]),
            (1, vec![2]),
            (0, vec![1]),
        ]
    );
    assert!(plot.starts_with('\n'));
    assert!(plot.ends_with("0    5\n\n"));
}

#[test]
fn axis_aligns_with_bar() {
    let pairs = sorted_pairs(12);
    let plot = ScatterPlot::new(&pairs, 12).to_string();
    let lines: Vec<&str> = plot.lines().collect();

    // Trailing blank line comes last.
    let ticks = lines[lines.len() - 3];
    let labels = lines[lines.len() - 2];
    assert_eq!(lines[lines.len() - 1], "");
    assert_eq!(ticks, "     '----'----'--");
    assert_eq!(labels, "     0    5    0  ");

    let bar = lines[1].find('|');
    assert_eq!(bar, Some(LABEL_WIDTH - 1));
    assert_eq!(ticks.find('\''), Some(LABEL_WIDTH - 1));
}

#[test]
fn marker_override_is_used() {
    let pairs = sorted_pairs(8);
    let config = PlotConfig {
        marker: '#',
        ..PlotConfig::default()
    };
    let plot = ScatterPlot::with_config(&pairs, 8, config).to_string();
    assert_eq!(plot.matches('#').count(), 8);
    assert!(!plot.contains('O'));
}

proptest! {
    #[test]
    fn every_seed_lands_on_its_own_row(n in 1u64..400) {
        let pairs = sorted_pairs(n);
        let plot = ScatterPlot::new(&pairs, n as usize).to_string();
        let rows = marker_columns(&plot);

        prop_assert_eq!(rows.len(), pairs[0].length as usize + 1);

        let mut drawn = 0;
        for (length, columns) in rows {
            for column in columns {
                prop_assert_eq!(collatz_core::sequence_length(column as u64), length);
                drawn += 1;
            }
        }
        prop_assert_eq!(drawn, n as usize);
    }
}
