mod chart;
mod readings_table;
mod relay_panel;
mod stat_card;
mod status_badge;
mod toast;

pub use chart::MetricChart;
pub use readings_table::ReadingsTable;
pub use relay_panel::RelayControls;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use toast::{ToastContainer, use_toasts};
