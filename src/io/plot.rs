//! Interactive display of the snapshot set.

use plotly::common::{Mode, Title};
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};

use crate::evolution::Snapshot;

pub const PLOT_TITLE: &str = "Time Evolution of the Wave Function";
pub const X_LABEL: &str = "x";
pub const Y_LABEL: &str = "Probability Density |ψ(x)|²";

/// Legend label for a snapshot, e.g. `t=0.10`.
pub fn time_label(time: f64) -> String {
    format!("t={:.2}", time)
}

/// One line per snapshot over `grid`.
pub fn density_plot(grid: &[f64], snapshots: &[Snapshot]) -> Plot {
    let mut plot = Plot::new();
    for snapshot in snapshots {
        let label = time_label(snapshot.time);
        let trace = Scatter::new(grid.to_vec(), snapshot.density.clone())
            .mode(Mode::Lines)
            .name(&label);
        plot.add_trace(trace);
    }

    let layout = Layout::new()
        .title(Title::new(PLOT_TITLE))
        .x_axis(Axis::new().title(Title::new(X_LABEL)).show_grid(true))
        .y_axis(Axis::new().title(Title::new(Y_LABEL)).show_grid(true))
        .show_legend(true)
        .width(1000)
        .height(600);
    plot.set_layout(layout);
    plot
}

/// Open the density plot in the default browser.
pub fn show_snapshots(grid: &[f64], snapshots: &[Snapshot]) {
    density_plot(grid, snapshots).show();
}
