// src/utils/format.rs

// Checkbox marker for a toggle
pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

// Horizontal slider track with the knob placed proportionally in [min, max]
pub fn slider_bar(value: usize, min: usize, max: usize, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let span = max.saturating_sub(min).max(1);
    let offset = value.clamp(min, max) - min;
    let knob = offset * (width - 1) / span;

    (0..width)
        .map(|i| match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

// Pad a string with spaces up to `width` characters; longer strings are kept whole
pub fn pad_to_width(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}
