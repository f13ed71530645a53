use super::*;
use crate::props::{MosaicProps, Workspace};
use crate::sink::LayoutLog;
use crate::tiles::{TileContent, TileKey};
use mosaic_common::{Rect, ToolbarControl, Window, WindowId, WindowMap};
use mosaic_tiling::{
    create_balanced_tree, Branch, DropPosition, MosaicEdit, MosaicLayout, MosaicNode, MosaicPath,
    SplitDirection,
};

struct Labels;

impl TileContent for Labels {
    type Output = String;

    fn render_preview(&self, window_id: &WindowId) -> String {
        format!("preview:{window_id}")
    }

    fn render_window(&self, key: &TileKey, _window: &Window) -> String {
        format!("window:{key}")
    }
}

fn viewport() -> Rect {
    Rect {
        x: 0.0,
        y: 0.0,
        width: 1200.0,
        height: 800.0,
    }
}

fn ids(names: &[&str]) -> Vec<WindowId> {
    names.iter().map(|n| WindowId::from(*n)).collect()
}

fn windows(names: &[&str]) -> WindowMap {
    names
        .iter()
        .map(|n| (WindowId::from(*n), Window::new(*n)))
        .collect()
}

fn props(names: &[&str], layout: MosaicLayout) -> MosaicProps {
    MosaicProps {
        windows: windows(names),
        workspace: Workspace::new("ws").with_layout(layout),
    }
}

fn balanced(names: &[&str]) -> MosaicLayout {
    create_balanced_tree(&ids(names), SplitDirection::Row).into()
}

fn mosaic(names: &[&str], layout: MosaicLayout) -> WorkspaceMosaic<LayoutLog> {
    WorkspaceMosaic::new(props(names, layout), LayoutLog::new())
}

/// Feed the last pushed layout back in as the workspace layout.
fn accept_last(m: &mut WorkspaceMosaic<LayoutLog>) {
    let layout = m.sink().last().cloned().expect("a pushed layout");
    let mut next = m.props().clone();
    next.workspace.layout = layout;
    m.set_props(next);
}

fn with_windows(m: &WorkspaceMosaic<LayoutLog>, names: &[&str]) -> MosaicProps {
    let mut next = m.props().clone();
    next.windows = windows(names);
    next
}

// -- Mount --

#[test]
fn mount_without_layout_pushes_balanced_tree() {
    let mut m = mosaic(&["a", "b", "c"], MosaicLayout::empty());
    m.did_mount();
    assert_eq!(m.sink().len(), 1);
    let pushed = m.sink().last().unwrap();
    assert_eq!(pushed.leaves(), ids(&["a", "b", "c"]));
    assert_eq!(pushed, &balanced(&["a", "b", "c"]));
}

#[test]
fn mount_with_matching_layout_pushes_it_unchanged() {
    let layout: MosaicLayout =
        MosaicNode::column(MosaicNode::leaf("b"), MosaicNode::leaf("a")).into();
    let mut m = mosaic(&["a", "b"], layout.clone());
    m.did_mount();
    assert_eq!(m.sink().pushed(), &[layout]);
}

#[test]
fn mount_without_windows_pushes_nothing() {
    let mut m = mosaic(&[], MosaicLayout::empty());
    m.did_mount();
    assert!(m.sink().is_empty());
}

// -- Updates --

#[test]
fn unchanged_window_set_pushes_nothing() {
    let mut m = mosaic(&["a", "b"], balanced(&["a", "b"]));
    let same = m.props().clone();
    m.set_props(same);
    assert!(m.sink().is_empty());
}

#[test]
fn added_window_rebuilds_over_all_windows() {
    let mut m = mosaic(&["a", "b"], balanced(&["a", "b"]));
    let next = with_windows(&m, &["a", "b", "c"]);
    m.set_props(next);
    assert_eq!(m.sink().pushed(), &[balanced(&["a", "b", "c"])]);
}

#[test]
fn removed_window_prunes_its_leaf() {
    let mut m = mosaic(&["a", "b", "c"], balanced(&["a", "b", "c"]));
    m.render(&Labels, viewport());
    let next = with_windows(&m, &["a", "c"]);
    m.set_props(next);
    assert_eq!(m.sink().len(), 1);
    assert_eq!(m.sink().last().unwrap().leaves(), ids(&["a", "c"]));
}

#[test]
fn removing_every_window_pushes_empty_layout() {
    let mut m = mosaic(&["a", "b", "c"], balanced(&["a", "b", "c"]));
    m.render(&Labels, viewport());
    let next = with_windows(&m, &[]);
    m.set_props(next);
    assert_eq!(m.sink().pushed(), &[MosaicLayout::empty()]);
    assert_eq!(serde_json::to_string(m.sink().last().unwrap()).unwrap(), "{}");
}

#[test]
fn removing_every_window_ignores_tree_shape() {
    let deep: MosaicLayout = MosaicNode::row(
        MosaicNode::leaf("a"),
        MosaicNode::column(
            MosaicNode::leaf("b"),
            MosaicNode::row(MosaicNode::leaf("c"), MosaicNode::leaf("d")),
        ),
    )
    .into();
    let mut m = mosaic(&["a", "b", "c", "d"], deep);
    let next = with_windows(&m, &[]);
    m.set_props(next);
    assert_eq!(m.sink().pushed(), &[MosaicLayout::empty()]);
}

#[test]
fn removing_any_strict_subset_leaves_the_rest() {
    let all = ["a", "b", "c", "d", "e"];
    for mask in 1u32..(1 << all.len()) - 1 {
        let remaining: Vec<&str> = all
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) == 0)
            .map(|(_, n)| *n)
            .collect();

        let mut m = mosaic(&all, balanced(&all));
        m.render(&Labels, viewport());
        let next = with_windows(&m, &remaining);
        m.set_props(next);

        let mut leaves = m.sink().last().unwrap().leaves();
        leaves.sort();
        assert_eq!(leaves, ids(&remaining), "mask {mask:#b}");
    }
}

#[test]
fn removal_before_any_render_finds_leaf_by_id() {
    let mut m = mosaic(&["a", "b", "c"], balanced(&["a", "b", "c"]));
    assert!(m.window_paths().is_empty());
    let next = with_windows(&m, &["a", "c"]);
    m.set_props(next);
    assert_eq!(m.sink().last().unwrap().leaves(), ids(&["a", "c"]));
}

#[test]
fn removal_with_stale_path_finds_leaf_by_id() {
    let mut m = mosaic(&["a", "b", "c"], balanced(&["a", "b", "c"]));
    m.render(&Labels, viewport());

    // The layout is rearranged without a render in between.
    let mut next = m.props().clone();
    next.workspace.layout = MosaicNode::row(
        MosaicNode::leaf("c"),
        MosaicNode::row(MosaicNode::leaf("b"), MosaicNode::leaf("a")),
    )
    .into();
    m.set_props(next);
    assert!(m.sink().is_empty());

    let next = with_windows(&m, &["b", "c"]);
    m.set_props(next);
    assert_eq!(m.sink().last().unwrap().leaves(), ids(&["c", "b"]));
}

#[test]
fn removing_the_only_tile_of_a_stale_layout_rebuilds() {
    // The layout only knows `a`; `b` is open but has no tile yet.
    let mut m = mosaic(&["a", "b"], MosaicNode::leaf("a").into());
    let next = with_windows(&m, &["b"]);
    m.set_props(next);
    assert_eq!(m.sink().pushed(), &[MosaicNode::leaf("b").into()]);
}

#[test]
fn remove_and_add_in_one_update_pushes_once() {
    let mut m = mosaic(&["a", "b"], balanced(&["a", "b"]));
    m.render(&Labels, viewport());
    let next = with_windows(&m, &["b", "c"]);
    m.set_props(next);
    assert_eq!(m.sink().pushed(), &[balanced(&["b", "c"])]);
}

#[test]
fn removal_of_window_without_tile_pushes_nothing() {
    // `c` is open but was never part of the layout.
    let mut m = mosaic(&["a", "b", "c"], balanced(&["a", "b"]));
    let next = with_windows(&m, &["a", "b"]);
    m.set_props(next);
    assert!(m.sink().is_empty());
}

#[test]
fn add_then_accept_then_remove_round_trip() {
    let mut m = mosaic(&["a"], MosaicLayout::empty());
    m.did_mount();
    accept_last(&mut m);

    let next = with_windows(&m, &["a", "b"]);
    m.set_props(next);
    accept_last(&mut m);
    m.render(&Labels, viewport());
    assert_eq!(m.props().workspace.layout.leaves(), ids(&["a", "b"]));

    let next = with_windows(&m, &["b"]);
    m.set_props(next);
    assert_eq!(m.sink().last().unwrap().root(), Some(&MosaicNode::leaf("b")));
}

// -- Rendering --

#[test]
fn render_produces_keyed_tiles_and_records_paths() {
    let mut m = mosaic(&["a", "b"], balanced(&["a", "b"]));
    let view = m.render(&Labels, viewport());
    let tiles = view.tiles();
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[0].window_id, WindowId::from("a"));
    assert_eq!(tiles[0].key.to_string(), "a-ws");
    assert_eq!(tiles[0].preview, "preview:a");
    assert_eq!(tiles[0].content, "window:a-ws");
    assert!(tiles[0].toolbar_controls.is_empty());
    assert!(tiles[0].rect.width > 0.0);

    assert_eq!(
        m.window_paths().get(&WindowId::from("b")),
        Some(&MosaicPath::from(vec![Branch::Second]))
    );
}

#[test]
fn render_without_windows_is_zero_state() {
    let mut m = mosaic(&[], MosaicLayout::empty());
    let view = m.render(&Labels, viewport());
    assert!(view.is_zero_state());
    assert!(m.window_paths().is_empty());
}

#[test]
fn render_without_layout_uses_generated_one() {
    let mut m = mosaic(&["a", "b", "c"], MosaicLayout::empty());
    let view = m.render(&Labels, viewport());
    assert_eq!(view.tiles().len(), 3);
    assert!(m.sink().is_empty());
}

#[test]
fn render_skips_leaves_without_windows() {
    let layout: MosaicLayout =
        MosaicNode::row(MosaicNode::leaf("a"), MosaicNode::leaf("ghost")).into();
    let mut m = mosaic(&["a"], layout);
    let view = m.render(&Labels, viewport());
    assert_eq!(view.tiles().len(), 1);
    assert!(m.window_paths().get(&WindowId::from("ghost")).is_none());
}

#[test]
fn render_tile_for_unknown_window_is_none() {
    let mut m = mosaic(&["a"], balanced(&["a"]));
    let tile = m.render_tile(&Labels, &WindowId::from("missing"), MosaicPath::root(), viewport());
    assert!(tile.is_none());
    assert!(m.window_paths().is_empty());
}

#[test]
fn render_forgets_paths_of_closed_windows() {
    let mut m = mosaic(&["a", "b"], balanced(&["a", "b"]));
    m.render(&Labels, viewport());
    assert_eq!(m.window_paths().len(), 2);

    let mut next = m.props().clone();
    next.windows = windows(&["a", "b"]);
    next.workspace.layout = MosaicNode::leaf("a").into();
    m.set_props(next);
    m.render(&Labels, viewport());
    assert_eq!(m.window_paths().len(), 1);
}

#[test]
fn new_workspace_id_changes_content_keys() {
    let mut m = mosaic(&["a"], balanced(&["a"]));
    let mut next = m.props().clone();
    next.workspace.id = "other".into();
    m.set_props(next);
    let view = m.render(&Labels, viewport());
    assert_eq!(view.tiles()[0].content, "window:a-other");
}

#[test]
fn configured_toolbar_controls_reach_tiles() {
    let settings = MosaicSettings {
        toolbar_controls: vec![ToolbarControl::Expand, ToolbarControl::Remove],
        ..MosaicSettings::default()
    };
    let start = props(&["a"], balanced(&["a"]));
    let mut m = WorkspaceMosaic::with_settings(start, LayoutLog::new(), settings);
    let view = m.render(&Labels, viewport());
    assert_eq!(
        view.tiles()[0].toolbar_controls,
        vec![ToolbarControl::Expand, ToolbarControl::Remove]
    );
}

// -- Change propagation --

#[test]
fn mosaic_change_is_forwarded_verbatim() {
    let mut m = mosaic(&["a", "b"], balanced(&["a", "b"]));
    let dragged: MosaicLayout =
        MosaicNode::column(MosaicNode::leaf("b"), MosaicNode::leaf("a")).into();
    m.mosaic_change(dragged.clone());
    assert_eq!(m.sink().pushed(), &[dragged]);
}

#[test]
fn resize_edit_is_forwarded() {
    let mut m = mosaic(&["a", "b"], balanced(&["a", "b"]));
    assert!(m.apply_edit(&MosaicEdit::Resize {
        path: MosaicPath::root(),
        split_percentage: 30.0,
    }));
    let pushed = m.sink().last().unwrap();
    assert_eq!(pushed.root().unwrap().as_split().unwrap().split_percentage, Some(30.0));
}

#[test]
fn drag_onto_root_pushes_each_window_once() {
    let mut m = mosaic(&["a", "b", "c"], balanced(&["a", "b", "c"]));
    assert!(m.apply_edit(&MosaicEdit::DragTo {
        source: MosaicPath::from(vec![Branch::First, Branch::First]),
        destination: MosaicPath::root(),
        position: DropPosition::Right,
    }));
    let mut leaves = m.sink().last().unwrap().leaves();
    assert_eq!(leaves.len(), 3);
    leaves.sort();
    assert_eq!(leaves, ids(&["a", "b", "c"]));
}

#[test]
fn invalid_edit_pushes_nothing() {
    let mut m = mosaic(&["a", "b"], balanced(&["a", "b"]));
    assert!(!m.apply_edit(&MosaicEdit::Remove {
        path: MosaicPath::from(vec![Branch::First, Branch::First]),
    }));
    assert!(m.sink().is_empty());
}

#[test]
fn toolbar_remove_drops_tile() {
    let mut m = mosaic(&["a", "b"], balanced(&["a", "b"]));
    m.render(&Labels, viewport());
    assert!(m.toolbar_action(&WindowId::from("a"), ToolbarControl::Remove));
    assert_eq!(m.sink().last().unwrap().root(), Some(&MosaicNode::leaf("b")));
}

#[test]
fn toolbar_expand_grows_tile() {
    let mut m = mosaic(&["a", "b"], balanced(&["a", "b"]));
    m.render(&Labels, viewport());
    assert!(m.toolbar_action(&WindowId::from("b"), ToolbarControl::Expand));
    let split = m.sink().last().unwrap().root().unwrap().as_split().cloned().unwrap();
    assert_eq!(split.split_percentage, Some(30.0));
}

#[test]
fn toolbar_action_needs_rendered_tile() {
    let mut m = mosaic(&["a", "b"], balanced(&["a", "b"]));
    assert!(!m.toolbar_action(&WindowId::from("a"), ToolbarControl::Hide));
    assert!(m.sink().is_empty());
}

#[test]
fn resize_tile_moves_divider_by_step() {
    let mut m = mosaic(&["a", "b"], balanced(&["a", "b"]));
    m.render(&Labels, viewport());
    assert!(m.resize_tile(&WindowId::from("b"), true));
    let split = m.sink().last().unwrap().root().unwrap().as_split().cloned().unwrap();
    assert_eq!(split.percentage(), 45.0);
}

#[test]
fn resize_single_tile_does_nothing() {
    let mut m = mosaic(&["a"], balanced(&["a"]));
    m.render(&Labels, viewport());
    assert!(!m.resize_tile(&WindowId::from("a"), true));
}
