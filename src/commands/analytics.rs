//! Analytics commands for the risk distribution chart

use crate::analytics::RiskDistribution;
use crate::session::Session;
use tauri::State;

/// Get the number of records per classification
///
/// Returns: chart title, axis labels and one bar per present category in
/// Bajo, Medio, Alto order
#[tauri::command]
pub fn get_risk_distribution(session: State<'_, Session>) -> RiskDistribution {
    session.distribution()
}
