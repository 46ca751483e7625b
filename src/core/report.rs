use crate::domain::model::Detachment;

/// One line per detachment: `<number> <name> - <city>[, <state>]`. The state
/// segment is omitted when empty. An empty slice renders as the empty string.
pub fn format_detachments(detachments: &[Detachment]) -> String {
    let lines: Vec<String> = detachments
        .iter()
        .map(|detachment| {
            let mut location = detachment.city.clone();
            if !detachment.state.is_empty() {
                location = format!("{}, {}", location, detachment.state);
            }
            format!("{} {} - {}", detachment.number, detachment.name, location)
        })
        .collect();
    lines.join("\n")
}
