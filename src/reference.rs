//! Console table of reference facts per planet.

use std::io::{self, Write};

use crate::config::{FactValue, Moons, PlanetFacts};

/// Header printed ahead of the table.
pub const REFERENCE_HEADER: &str = "Additional information on each of the 8 major planets:";

fn format_value(value: FactValue) -> String {
    match value {
        FactValue::Int(v) => v.to_string(),
        FactValue::Float(v) => format!("{v:?}"),
    }
}

fn format_moons(moons: &Moons) -> String {
    match moons {
        Moons::None => "[0]".to_string(),
        Moons::Named(names) => {
            let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
            format!("[{}]", quoted.join(", "))
        }
        Moons::Counted(count) => format!("['{count}']"),
    }
}

/// Render one fact record as a key/value map.
pub fn format_facts(facts: &PlanetFacts) -> String {
    format!(
        "{{'Radius in KM': {}, 'Distance from the Sun in AU': {}, 'Moons': {}}}",
        format_value(facts.radius_km),
        format_value(facts.distance_au),
        format_moons(&facts.moons)
    )
}

/// Write one line per planet, record first and name last, in the given order.
pub fn print_reference_table<W: Write>(facts: &[PlanetFacts], out: &mut W) -> io::Result<()> {
    for entry in facts {
        writeln!(out, "{} {}", format_facts(entry), entry.name)?;
    }
    Ok(())
}
