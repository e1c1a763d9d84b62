//! Display-string helpers for asset identifiers
//!
//! - `wrap_text`: soft-wraps long `prefix + value` strings for tooltips
//! - `extract_friendly_name`: short mesh name for list rows
//! - `component_name_to_mesh_id`: strips the numeric instance suffix the
//!   game appends to component names

/// Line width used by the overlay tooltips.
pub const DEFAULT_WRAP_WIDTH: usize = 70;

const BREAK_CHARS: [char; 5] = [' ', '_', '/', '-', '\\'];

/// Wraps `prefix + value` at [`DEFAULT_WRAP_WIDTH`] characters.
pub fn wrap_text(prefix: &str, value: &str) -> String {
    wrap_text_width(prefix, value, DEFAULT_WRAP_WIDTH)
}

/// Wraps `prefix + value` into lines of at most `max_line_length` characters
///
/// Each cut prefers the break character closest to the limit, searching
/// back to the middle of the line; the line ends just after it. Without a
/// break character in that window the line is cut hard at the limit.
/// Lines are joined with `\n` and no characters are added or dropped, so
/// removing the inserted newlines gives back `prefix + value`.
///
/// A width of 0 is treated as 1.
pub fn wrap_text_width(prefix: &str, value: &str, max_line_length: usize) -> String {
    let max = max_line_length.max(1);
    let text = format!("{}{}", prefix, value);
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= max {
        return text;
    }

    let mut lines: Vec<String> = Vec::new();
    let mut start = 0;

    while chars.len() - start > max {
        let window = &chars[start..start + max];
        let cut = (max / 2..max)
            .rev()
            .find(|&i| BREAK_CHARS.contains(&window[i]))
            .map_or(max, |i| i + 1);

        lines.push(window[..cut].iter().collect());
        start += cut;
    }
    lines.push(chars[start..].iter().collect());

    lines.join("\n")
}

/// Text before the first `-`, or the whole name when there is none.
///
/// `"PWM_Quarry-Large"` → `"PWM_Quarry"`, `"-x"` → `""`.
pub fn extract_friendly_name(mesh_name: &str) -> &str {
    mesh_name
        .split_once('-')
        .map_or(mesh_name, |(name, _)| name)
}

/// Strips a trailing `_<digits>` instance suffix
///
/// The suffix is removed when everything after the last `_` is digits (an
/// empty tail counts) and the `_` is not the first character.
///
/// ```
/// use overlay_settings::core::text::component_name_to_mesh_id;
///
/// assert_eq!(component_name_to_mesh_id("PWM_Quarry_2x2_2147476295"), "PWM_Quarry_2x2");
/// assert_eq!(component_name_to_mesh_id("PWM_Quarry_2x2_Large"), "PWM_Quarry_2x2_Large");
/// ```
pub fn component_name_to_mesh_id(name: &str) -> &str {
    match name.rfind('_') {
        Some(pos) if pos > 0 && name[pos + 1..].bytes().all(|b| b.is_ascii_digit()) => &name[..pos],
        _ => name,
    }
}

/// `(x, y, z)` with one decimal place.
pub fn format_coordinates(x: f32, y: f32, z: f32) -> String {
    format!("({:.1}, {:.1}, {:.1})", x, y, z)
}
