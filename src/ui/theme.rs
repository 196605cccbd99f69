//! Shared class helpers so pages stay visually consistent.
//! Every class referenced here is defined in `assets/main.css`.

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary() -> &'static str {
    "btn btn-primary"
}

pub fn btn_danger() -> &'static str {
    "btn btn-danger"
}

pub fn btn_small(active: bool) -> &'static str {
    if active {
        "btn-small btn-small-active"
    } else {
        "btn-small"
    }
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-btn nav-btn-active"
    } else {
        "nav-btn"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class() -> &'static str {
    "input"
}

pub fn label_class() -> &'static str {
    "field-label"
}

// ============================================
// PANELS / TABLES
// ============================================

pub fn panel() -> &'static str {
    "panel"
}

pub fn panel_title() -> &'static str {
    "panel-title"
}

pub fn table() -> &'static str {
    "data-table"
}

// ============================================
// ACCENT / HIGHLIGHT STYLES
// ============================================

/// Green for gains, red for losses, muted for break-even.
pub fn profit_text(value: f64) -> &'static str {
    if value > 0.0 {
        "text-gain"
    } else if value < 0.0 {
        "text-loss"
    } else {
        "text-muted"
    }
}
