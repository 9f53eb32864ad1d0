//! Placeholder geometry prediction
//!
//! While a card is being dragged the view draws a gap where the card would
//! land. The gap's position is predicted from the measured extents of the
//! cards that would sit above it in the destination list. All geometry comes
//! from a `Measure` implementation, so the predictor itself never touches a
//! rendering backend.
//!
//! Only card drags get a gap. Lists sit side by side, and the predictor models
//! vertical stacking within a list only, so a list drag yields no placeholder
//! where a browser board would also draw one for the dragged column.

use serde::{Deserialize, Serialize};

use super::engine::DragLocation;
use super::model::Board;
use crate::types::{DraggableId, ListId};

/// Measured footprint of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
    pub margin_bottom: f64,
}

/// Leading padding of a list container
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub left: f64,
}

/// Where the drop gap should be drawn, relative to the container
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PlaceholderRect {
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Geometry source for the predictor
pub trait Measure {
    /// Extent of a rendered list or card, or `None` if it is not mounted
    fn measure_extent(&self, element: DraggableId) -> Option<Extent>;

    /// Leading padding of a list's card container
    fn measure_container_padding(&self, container: ListId) -> Padding;
}

/// Compute the gap for a drop at `target_index` among `siblings`
///
/// The vertical offset is the container's top padding plus the height and
/// bottom margin of every sibling before the target. The horizontal offset is
/// the left padding, since cards only stack vertically. The gap takes the
/// dragged element's own size.
pub fn predict_rect(
    siblings: &[Extent],
    target_index: usize,
    padding: Padding,
    dragged: Extent,
) -> PlaceholderRect {
    debug_assert!(target_index <= siblings.len());
    let offset_y = padding.top
        + siblings
            .iter()
            .take(target_index)
            .map(|s| s.height + s.margin_bottom)
            .sum::<f64>();

    PlaceholderRect {
        offset_x: padding.left,
        offset_y,
        width: dragged.width,
        height: dragged.height,
    }
}

/// Gap at the point where a card was picked up
pub fn predict_on_start(
    board: &Board,
    measure: &impl Measure,
    dragged: DraggableId,
    source: DragLocation,
) -> Option<PlaceholderRect> {
    predict(board, measure, dragged, source, source)
}

/// Gap at the destination the pointer currently hovers over
///
/// No destination means no gap.
pub fn predict_on_update(
    board: &Board,
    measure: &impl Measure,
    dragged: DraggableId,
    source: DragLocation,
    destination: Option<DragLocation>,
) -> Option<PlaceholderRect> {
    predict(board, measure, dragged, source, destination?)
}

fn predict(
    board: &Board,
    measure: &impl Measure,
    dragged: DraggableId,
    source: DragLocation,
    target: DragLocation,
) -> Option<PlaceholderRect> {
    let DraggableId::Card(dragged_card) = dragged else {
        return None;
    };

    let Some(dragged_extent) = measure.measure_extent(dragged) else {
        tracing::warn!(%dragged, "dragged element not measurable, no placeholder");
        return None;
    };

    if board.locate_card(dragged_card) != Some(source) {
        tracing::debug!(%dragged, ?source, "reported drag source is stale");
    }

    let Some(list) = board.list(target.container_index) else {
        tracing::warn!(%dragged, ?target, "drop target list does not exist, no placeholder");
        return None;
    };

    // The dragged card is lifted out before counting, wherever it now sits
    let lifted: Vec<_> = list
        .cards()
        .iter()
        .filter(|card| card.id() != dragged_card)
        .collect();

    if target.item_index > lifted.len() {
        tracing::warn!(
            %dragged,
            ?target,
            len = lifted.len(),
            "drop index past the end of the list, no placeholder"
        );
        return None;
    }

    let siblings = lifted
        .iter()
        .take(target.item_index)
        .map(|card| measure.measure_extent(DraggableId::Card(card.id())))
        .collect::<Option<Vec<Extent>>>();

    let Some(siblings) = siblings else {
        tracing::warn!(%dragged, "sibling not measurable, no placeholder");
        return None;
    };

    let padding = measure.measure_container_padding(list.id());
    Some(predict_rect(
        &siblings,
        target.item_index,
        padding,
        dragged_extent,
    ))
}

/// Fixed-geometry measurer: every card and every list share one size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMeasure {
    pub card: Extent,
    pub list: Extent,
    pub padding: Padding,
}

impl Measure for LayoutMeasure {
    fn measure_extent(&self, element: DraggableId) -> Option<Extent> {
        match element {
            DraggableId::Card(_) => Some(self.card),
            DraggableId::List(_) => Some(self.list),
        }
    }

    fn measure_container_padding(&self, _container: ListId) -> Padding {
        self.padding
    }
}
