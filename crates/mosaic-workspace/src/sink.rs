//! Where the mosaic pushes new layouts.

use mosaic_tiling::MosaicLayout;

/// Receiver of layout updates, standing in for the application's
/// "update workspace mosaic layout" action.
pub trait LayoutSink {
    fn update_workspace_mosaic_layout(&mut self, layout: MosaicLayout);
}

impl<F> LayoutSink for F
where
    F: FnMut(MosaicLayout),
{
    fn update_workspace_mosaic_layout(&mut self, layout: MosaicLayout) {
        self(layout)
    }
}

/// A sink that keeps every layout it receives, oldest first.
#[derive(Debug, Clone, Default)]
pub struct LayoutLog {
    pushed: Vec<MosaicLayout>,
}

impl LayoutLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pushed(&self) -> &[MosaicLayout] {
        &self.pushed
    }

    pub fn last(&self) -> Option<&MosaicLayout> {
        self.pushed.last()
    }

    pub fn len(&self) -> usize {
        self.pushed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pushed.is_empty()
    }

    /// Drain the received layouts.
    pub fn take(&mut self) -> Vec<MosaicLayout> {
        std::mem::take(&mut self.pushed)
    }
}

impl LayoutSink for LayoutLog {
    fn update_workspace_mosaic_layout(&mut self, layout: MosaicLayout) {
        self.pushed.push(layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_tiling::MosaicNode;

    #[test]
    fn closures_are_sinks() {
        let mut received = Vec::new();
        {
            let mut sink = |layout: MosaicLayout| received.push(layout);
            sink.update_workspace_mosaic_layout(MosaicLayout::empty());
        }
        assert_eq!(received, vec![MosaicLayout::empty()]);
    }

    #[test]
    fn log_records_in_order() {
        let mut log = LayoutLog::new();
        log.update_workspace_mosaic_layout(MosaicNode::leaf("a").into());
        log.update_workspace_mosaic_layout(MosaicLayout::empty());
        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some(&MosaicLayout::empty()));
        let drained = log.take();
        assert_eq!(drained[0].leaves().len(), 1);
        assert!(log.is_empty());
    }
}
