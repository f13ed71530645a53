/// Written to the platform config path on first run. Every key is
/// commented out, so the file parses to the defaults.
pub(crate) const DEFAULT_CONFIG_TOML: &str = r##"# Mosaic Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# gap = 4                  # 0-40, pixels between tiles
# outer_padding = 0        # 0-80, pixels around the mosaic
# min_tile_size = 50.0     # 0-1000, smallest tile extent
# resize_step = 5          # 1-50, percent per resize step
# start_direction = "row"  # row, column

[tiles]
# toolbar_controls = []    # any of: expand, hide, remove
# zero_state_text = ""

[logging]
# level = "INFO"           # DEBUG, INFO, WARNING, ERROR
"##;
