pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

pub fn format_file_size(gb: f64) -> String {
    format!("{:.2} GB", gb)
}

pub fn format_speed(toks_per_sec: f64) -> String {
    format!("{:.1} tok/s", toks_per_sec)
}

pub fn format_vram(gb: f64) -> String {
    format!("{:.1} GB", gb)
}

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// URL-safe slug: lowercase ASCII alphanumerics, every other run collapsed to
/// a single `-`, no leading or trailing `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
