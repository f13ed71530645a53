//! Core types and constructors for WorkspaceMosaic.

use mosaic_common::ToolbarControl;
use mosaic_config::MosaicConfig;
use mosaic_tiling::{LayoutEngine, MosaicLayout, SplitDirection};

use crate::paths::PathTable;
use crate::props::MosaicProps;
use crate::reconcile::determine_workspace_layout;
use crate::sink::LayoutSink;

/// Behavior knobs of the mosaic, usually taken from `MosaicConfig`.
#[derive(Debug, Clone)]
pub struct MosaicSettings {
    /// Direction of the root split of generated layouts.
    pub start_direction: SplitDirection,
    pub engine: LayoutEngine,
    pub toolbar_controls: Vec<ToolbarControl>,
    /// Percentage points moved by one resize step.
    pub resize_step: f64,
    pub zero_state_text: String,
}

impl Default for MosaicSettings {
    fn default() -> Self {
        Self::from(&MosaicConfig::default())
    }
}

impl From<&MosaicConfig> for MosaicSettings {
    fn from(config: &MosaicConfig) -> Self {
        Self {
            start_direction: config.layout.start_direction,
            engine: config.layout.engine(),
            toolbar_controls: config.tiles.toolbar_controls.clone(),
            resize_step: config.layout.resize_step as f64,
            zero_state_text: config.tiles.zero_state_text.clone(),
        }
    }
}

/// A work area holding any number of windows as tiles of one mosaic.
///
/// Application state owns the windows and the layout; the component reads
/// them from its props and pushes replacement layouts through its sink.
pub struct WorkspaceMosaic<S: LayoutSink> {
    pub(super) props: MosaicProps,
    pub(super) sink: S,
    /// Window paths seen on the last render pass.
    pub(super) window_paths: PathTable,
    pub(super) settings: MosaicSettings,
}

impl<S: LayoutSink> WorkspaceMosaic<S> {
    pub fn new(props: MosaicProps, sink: S) -> Self {
        Self::with_settings(props, sink, MosaicSettings::default())
    }

    pub fn with_settings(props: MosaicProps, sink: S, settings: MosaicSettings) -> Self {
        Self {
            props,
            sink,
            window_paths: PathTable::new(),
            settings,
        }
    }

    // -- Accessors --

    pub fn props(&self) -> &MosaicProps {
        &self.props
    }

    pub fn settings(&self) -> &MosaicSettings {
        &self.settings
    }

    pub fn window_paths(&self) -> &PathTable {
        &self.window_paths
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The layout the mosaic shows: the workspace layout, or a generated
    /// one while the workspace has none.
    pub fn displayed_layout(&self) -> MosaicLayout {
        let current = &self.props.workspace.layout;
        if !current.is_empty() {
            return current.clone();
        }
        determine_workspace_layout(&self.props.windows, current, self.settings.start_direction)
            .into_layout(current)
    }

    pub(super) fn push(&mut self, layout: MosaicLayout) {
        self.sink.update_workspace_mosaic_layout(layout);
    }
}
