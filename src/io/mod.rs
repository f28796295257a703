//! IO module - parameter files and plotting for the simulation.

mod config;
mod plot;

pub use config::{read_params, parse_params, SimulationParams, InitialNormalization};
pub use plot::{density_plot, show_snapshots, time_label, PLOT_TITLE, X_LABEL, Y_LABEL};
