use itertools::Itertools;

/// Renders a grid state as space-separated `1`/`0` digits, one row per
/// line, the way the demo binary prints it.
pub fn render(state: &[Vec<bool>]) -> String {
    state
        .iter()
        .map(|row| row.iter().map(|&cell| u8::from(cell)).join(" "))
        .join("\n")
}
