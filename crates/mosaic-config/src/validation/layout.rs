//! `[layout]` bounds.

use crate::schema::LayoutConfig;

use super::helpers::check_range;

pub(crate) fn validate_layout(errors: &mut Vec<String>, layout: &LayoutConfig) {
    check_range(errors, "layout.gap", layout.gap, 0..=40);
    check_range(errors, "layout.outer_padding", layout.outer_padding, 0..=80);
    check_range(errors, "layout.min_tile_size", layout.min_tile_size, 0.0..=1000.0);
    check_range(errors, "layout.resize_step", layout.resize_step, 1..=50);
}
