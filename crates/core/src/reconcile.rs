//! Reparenting of top-level widgets into the panels that visually enclose them.

use fig2ui_idf::WidgetNode;

/// Moves each widget in `others` into the first frame whose rectangle fully
/// contains it, translating it into the frame's coordinates.
///
/// Absorbed widgets are appended after the frame's own children. The result
/// is the frames in build order followed by the unabsorbed widgets in build
/// order.
pub fn reconcile(mut frames: Vec<WidgetNode>, others: Vec<WidgetNode>) -> Vec<WidgetNode> {
    let mut pool: Vec<Option<WidgetNode>> = others.into_iter().map(Some).collect();

    for frame in frames.iter_mut().filter(|f| f.is_frame()) {
        let area = frame.geometry;
        for slot in pool.iter_mut() {
            if let Some(mut node) = slot.take_if(|node| area.contains(&node.geometry)) {
                log::debug!("Moving '{}' into frame '{}'", node.tag, frame.tag);
                node.geometry = node.geometry.relative_to(area.origin());
                frame.children.push(node);
            }
        }
    }

    frames.extend(pool.into_iter().flatten());
    frames
}
