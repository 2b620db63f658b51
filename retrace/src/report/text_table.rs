use crate::aggregate::CountEntry;
use std::collections::HashMap;

/// plain-text rendering of ranked counts, one line per entry.
///
/// labels are resolved through `labels`, cut to `width` characters and right
/// aligned; counts are right aligned in a 7 character column.
pub fn render_text_table(
    entries: &[CountEntry],
    labels: &HashMap<String, String>,
    width: usize,
) -> String {
    let mut lines = vec![
        format!("{:<width$}| Count ", "Stn/stop"),
        format!("{}+-------", "-".repeat(width)),
    ];
    for entry in entries.iter() {
        let key = entry.key.to_string();
        let label = labels.get(&key).unwrap_or(&key);
        let short = label.chars().take(width).collect::<String>();
        lines.push(format!("{short:>width$}|{:>7}", entry.count));
    }
    lines.join("\n")
}
