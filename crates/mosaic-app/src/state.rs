//! Loading and saving workspace state files.

use std::path::Path;

use mosaic_common::{MosaicError, Result};
use mosaic_workspace::MosaicProps;
use tracing::{debug, info};

/// Read a state file: `{"windows": {...}, "workspace": {"id", "layout"}}`.
pub fn load_state(path: &Path) -> Result<MosaicProps> {
    let content = std::fs::read_to_string(path)?;
    let props: MosaicProps = serde_json::from_str(&content)
        .map_err(|e| MosaicError::State(format!("{}: {e}", path.display())))?;
    debug!(
        path = %path.display(),
        windows = props.windows.len(),
        "loaded state"
    );
    Ok(props)
}

/// Write `props` to `path` as pretty-printed JSON.
pub fn save_state(path: &Path, props: &MosaicProps) -> Result<()> {
    let content =
        serde_json::to_string_pretty(props).map_err(|e| MosaicError::State(e.to_string()))?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), "saved state");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_common::{Window, WindowId};
    use mosaic_tiling::MosaicNode;
    use mosaic_workspace::Workspace;

    #[test]
    fn save_then_load_keeps_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut props = MosaicProps {
            windows: Default::default(),
            workspace: Workspace::new("ws").with_layout(MosaicNode::leaf("a")),
        };
        props.windows.insert(WindowId::from("a"), Window::new("a"));
        save_state(&path, &props).unwrap();

        assert_eq!(load_state(&path).unwrap(), props);
    }

    #[test]
    fn missing_layout_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let json = r#"{"windows": {"a": {"id": "a"}}, "workspace": {"id": "ws"}}"#;
        std::fs::write(&path, json).unwrap();

        let props = load_state(&path).unwrap();
        assert!(props.workspace.layout.is_empty());
        assert_eq!(props.windows.len(), 1);
    }

    #[test]
    fn malformed_state_is_state_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_state(&path), Err(MosaicError::State(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_state(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(MosaicError::Io(_))));
    }
}
