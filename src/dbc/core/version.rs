use crate::dbc::core::strings;
use crate::dbc::types::database::DatabaseDBC;

pub(crate) fn decode(db: &mut DatabaseDBC, line: &str) {
    // Example: VERSION "1.0"
    let rest: &str = line.trim_start_matches("VERSION");
    db.version = match strings::take_quoted(rest) {
        Some((version, _)) => version,
        None => rest.trim().trim_matches('"').to_string(),
    };
}
