//! Subcommand implementations. Each returns the text to print.

use mosaic_common::{MosaicError, Rect, Result, Window, WindowId, WindowMap};
use mosaic_tiling::{create_balanced_tree, MosaicLayout};
use mosaic_workspace::{
    LayoutLog, MosaicProps, MosaicSettings, MosaicView, TileContent, TileKey, WorkspaceMosaic,
};
use tracing::debug;

/// Tile content for terminal output: the content key stands in for the
/// window itself.
struct KeyContent;

impl TileContent for KeyContent {
    type Output = String;

    fn render_preview(&self, window_id: &WindowId) -> String {
        window_id.to_string()
    }

    fn render_window(&self, key: &TileKey, _window: &Window) -> String {
        key.to_string()
    }
}

fn viewport(width: f64, height: f64) -> Rect {
    Rect {
        x: 0.0,
        y: 0.0,
        width,
        height,
    }
}

fn layout_json(layout: &MosaicLayout) -> Result<String> {
    serde_json::to_string(layout)
        .map_err(|e| MosaicError::Other(format!("failed to serialize layout: {e}")))
}

/// Balanced layout over `ids`, sorted and deduplicated.
pub fn balance(ids: &[String], settings: &MosaicSettings) -> Result<String> {
    let mut ids: Vec<WindowId> = ids.iter().map(|id| WindowId::new(id.as_str())).collect();
    ids.sort();
    ids.dedup();
    let layout = MosaicLayout::from(create_balanced_tree(&ids, settings.start_direction));
    layout_json(&layout)
}

/// What `reconcile` produced: the printable report and the new state.
pub struct Reconciliation {
    pub report: String,
    pub props: MosaicProps,
}

/// Mount `props`, switch the open windows to `window_ids` and collect
/// every pushed layout.
///
/// Pushed layouts are accepted into the state as the application would,
/// and the mosaic renders once between mount and the window change so
/// removals address the tiles it drew.
pub fn reconcile(
    props: MosaicProps,
    window_ids: &[String],
    settings: MosaicSettings,
) -> Result<Reconciliation> {
    let windows: WindowMap = window_ids
        .iter()
        .filter(|id| !id.is_empty())
        .map(|id| {
            let id = WindowId::new(id.as_str());
            let window = props
                .windows
                .get(&id)
                .cloned()
                .unwrap_or_else(|| Window::new(id.clone()));
            (id, window)
        })
        .collect();

    let mut mosaic = WorkspaceMosaic::with_settings(props, LayoutLog::new(), settings);
    mosaic.did_mount();
    let mut pushed = accept_pushed(&mut mosaic);
    mosaic.render(&KeyContent, viewport(1200.0, 800.0));

    let mut next = mosaic.props().clone();
    next.windows = windows;
    mosaic.set_props(next);
    pushed.extend(accept_pushed(&mut mosaic));
    debug!(pushed = pushed.len(), "reconcile finished");

    let mut report = String::new();
    for layout in &pushed {
        report.push_str(&format!("pushed: {}\n", layout_json(layout)?));
    }
    let props = mosaic.props().clone();
    report.push_str(&format!("final: {}", layout_json(&props.workspace.layout)?));
    Ok(Reconciliation { report, props })
}

/// Drain the sink and store the newest layout in the props.
fn accept_pushed(mosaic: &mut WorkspaceMosaic<LayoutLog>) -> Vec<MosaicLayout> {
    let pushed = mosaic.sink_mut().take();
    if let Some(layout) = pushed.last() {
        let mut props = mosaic.props().clone();
        props.workspace.layout = layout.clone();
        // Same windows, so this only records the layout.
        mosaic.set_props(props);
    }
    pushed
}

/// One line per tile within a `width` x `height` viewport, or the zero
/// state text.
pub fn render(props: MosaicProps, width: f64, height: f64, settings: MosaicSettings) -> String {
    let mut mosaic = WorkspaceMosaic::with_settings(props, LayoutLog::new(), settings);
    match mosaic.render(&KeyContent, viewport(width, height)) {
        MosaicView::ZeroState { text } if text.is_empty() => "(no windows)".to_string(),
        MosaicView::ZeroState { text } => text,
        MosaicView::Tiles(tiles) => tiles
            .iter()
            .map(|tile| {
                format!(
                    "{}\t{}\t{:.0},{:.0} {:.0}x{:.0}\t{}",
                    tile.window_id,
                    tile.path,
                    tile.rect.x,
                    tile.rect.y,
                    tile.rect.width,
                    tile.rect.height,
                    tile.content
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
