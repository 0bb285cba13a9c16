use crate::model::{RgbTriple, SelectedFile};

const MAX_NAME_LEN: usize = 48;
const LABEL_DELIMITER: &str = ", ";
const SUMMARY_DELIMITER: &str = " | ";

/// `"10, 20, 30"`, with the service's numbers as received.
pub fn swatch_label(color: &RgbTriple) -> String {
    color
        .channels()
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(LABEL_DELIMITER)
}

pub fn css_rgb(color: &RgbTriple) -> String {
    let [r, g, b] = color.channels();
    format!("rgb({r},{g},{b})")
}

pub fn palette_summary(colors: &[RgbTriple]) -> String {
    let values = colors
        .iter()
        .map(swatch_label)
        .collect::<Vec<_>>()
        .join(SUMMARY_DELIMITER);
    format!("RGB Values: {values}")
}

pub fn file_label(file: &SelectedFile) -> String {
    let name = if file.name.chars().count() > MAX_NAME_LEN {
        let mut truncated = file.name.chars().take(MAX_NAME_LEN).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        file.name.clone()
    };
    format!("{name} ({}, {})", file.mime, format_size(file.byte_len()))
}

fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];

    if bytes < 1024 {
        let suffix = if bytes == 1 { "" } else { "s" };
        return format!("{bytes} byte{suffix}");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = *next;
    }
    format!("{value:.1} {unit}")
}
