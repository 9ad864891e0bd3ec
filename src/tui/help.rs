//! Help text content for the help modal

/// Key bindings shown by `?`.
pub fn help_lines() -> Vec<String> {
    [
        "Navigation:",
        "  Arrow keys       Move cursor",
        "  Tab / Shift+Tab  Move right / left",
        "  Home / End       First / last column",
        "  PageUp / PageDn  Scroll by a screen",
        "  g                Go to cell (e.g. C12)",
        "",
        "Editing:",
        "  Enter / e        Edit cell",
        "  =                Start a formula",
        "  c / Delete       Clear cell",
        "  Esc / Ctrl+g     Cancel prompt",
        "",
        "Files:",
        "  s                Save",
        "  l                Load",
        "",
        "Other:",
        "  ?                This help (any key closes)",
        "  q / Ctrl+c       Quit",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
