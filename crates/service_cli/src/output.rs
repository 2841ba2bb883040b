//! Result rendering for table and JSON output.

use pricer_pricing::ArithmeticBounds;
use serde_json::{Map, Value};

use crate::config::OutputFormat;
use crate::Result;

/// Render a single option price.
pub fn render_price(label: &str, price: f64, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut record = Map::new();
            record.insert(label.to_string(), Value::from(price));
            Ok(serde_json::to_string(&record)?)
        }
        OutputFormat::Table => Ok(table(&[(label, price)])),
    }
}

/// Render the arithmetic bounds record.
pub fn render_bounds(bounds: &ArithmeticBounds, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(bounds)?),
        OutputFormat::Table => Ok(table(&[
            ("lower_bound", bounds.lower_bound),
            ("upper_bound", bounds.upper_bound),
            ("rho_star", bounds.rho_star),
            ("EQ_G", bounds.eq_g),
            ("V0_G", bounds.v0_g),
        ])),
    }
}

fn table(rows: &[(&str, f64)]) -> String {
    let mut out = String::new();
    out.push_str("┌──────────────┬──────────────────────┐\n");
    out.push_str("│ Field        │ Value                │\n");
    out.push_str("├──────────────┼──────────────────────┤\n");
    for (name, value) in rows {
        out.push_str(&format!("│ {:<12} │ {:>20.10} │\n", name, value));
    }
    out.push_str("└──────────────┴──────────────────────┘");
    out
}
