//! Per-course block colours.

use sha2::{Digest, Sha256};

/// Default palette, handed out in order before falling back to derived colours.
pub const BASE_COLORS: [&str; 11] = [
    "red", "lime", "blue", "fuchsia", "coral", "green", "#FF6F00", "#00FFEC", "gold", "#EF02FF",
    "#7417FF",
];

/// Hands out one colour per course.
///
/// Palette entries come first. Once they run out, colours are derived from a
/// hash of the course code so repeated runs produce the same page.
#[derive(Debug, Clone)]
pub struct ColorGen {
    palette: Vec<String>,
    next_index: usize,
}

impl ColorGen {
    pub fn new(palette: Vec<String>) -> Self {
        Self {
            palette,
            next_index: 0,
        }
    }

    pub fn with_base_colors() -> Self {
        Self::new(BASE_COLORS.iter().map(|c| c.to_string()).collect())
    }

    pub fn next_for(&mut self, key: &str) -> String {
        match self.palette.get(self.next_index) {
            Some(color) => {
                self.next_index += 1;
                color.clone()
            }
            None => derived_color(key),
        }
    }
}

impl Default for ColorGen {
    fn default() -> Self {
        Self::with_base_colors()
    }
}

fn derived_color(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    format!("rgb({}, {}, {})", digest[0], digest[1], digest[2])
}
