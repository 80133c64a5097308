// src/presentation/mod.rs
//! Renderers for a [`project_stats_domain::ScanResult`].

mod json;
mod text;

pub use json::{FileAgeDto, LanguageDto, RankedFileDto, ScanResponse};
pub use text::TextReport;

/// Formats `n` with a comma every three digits.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
