//! Layout mutation actions and undo logic.
//!
//! Every action validates a candidate against the committed layout and
//! only writes it back on acceptance, so a rejected action leaves the
//! layout untouched.

use tracing::trace;

use crate::error::Rejection;
use crate::types::{ItemKind, Layout, PlacedItem, PlacementRules, Rotation};
use crate::validation::check_in_plan;

/// Undo token for reverting a single mutation step.
///
/// Each token remembers the id it touched so a stale token is refused
/// instead of reverting some other item.
#[derive(Debug, Clone, PartialEq)]
pub enum StepUndo {
    Add { index: usize, item_id: String },
    Move { index: usize, old: PlacedItem },
    Rotate { index: usize, old: PlacedItem },
    Delete { index: usize, saved: PlacedItem },
}

/// Id for a new item of `kind`: `<kind>-<n>` with `n` one past the largest
/// numeric suffix already in use, or the smallest free suffix once that
/// would overflow.
pub fn next_item_id(items: &[PlacedItem], kind: ItemKind) -> String {
    let used: Vec<u64> = items
        .iter()
        .filter_map(|item| item.id.rsplit_once('-'))
        .filter_map(|(_, n)| n.parse::<u64>().ok())
        .collect();
    let n = match used.iter().max() {
        None => 1,
        Some(max) => max
            .checked_add(1)
            .unwrap_or_else(|| first_unused_suffix(&used)),
    };
    format!("{}-{}", kind, n)
}

fn first_unused_suffix(used: &[u64]) -> u64 {
    // len + 1 candidates cannot all be taken by len ids
    (1..=used.len() as u64 + 1)
        .find(|n| !used.contains(n))
        .unwrap_or(1)
}

fn index_of(layout: &Layout, item_id: &str) -> Result<usize, Rejection> {
    layout
        .placed_items
        .iter()
        .position(|item| item.id == item_id)
        .ok_or_else(|| Rejection::UnknownItem {
            item_id: item_id.to_owned(),
        })
}

/// Place a new item of `kind` at room-local `(x, y)`.
pub fn add_item(
    layout: &mut Layout,
    kind: ItemKind,
    room_id: &str,
    x: f64,
    y: f64,
    rotation: Rotation,
    rules: &PlacementRules,
) -> Result<StepUndo, Rejection> {
    let candidate = PlacedItem {
        id: next_item_id(&layout.placed_items, kind),
        kind,
        room_id: room_id.to_owned(),
        x,
        y,
        rotation,
    };
    check_in_plan(&candidate, &layout.floor_plan, &layout.placed_items, rules)?;
    trace!(item = %candidate.id, room = room_id, x, y, "item added");
    let item_id = candidate.id.clone();
    layout.placed_items.push(candidate);
    Ok(StepUndo::Add {
        index: layout.placed_items.len() - 1,
        item_id,
    })
}

/// Move an item to room-local `(x, y)` in `room_id`, which may differ from
/// its current room.
pub fn move_item(
    layout: &mut Layout,
    item_id: &str,
    room_id: &str,
    x: f64,
    y: f64,
    rules: &PlacementRules,
) -> Result<StepUndo, Rejection> {
    let index = index_of(layout, item_id)?;
    let candidate = layout.placed_items[index].relocated(room_id, x, y);
    check_in_plan(&candidate, &layout.floor_plan, &layout.placed_items, rules)?;
    trace!(item = item_id, room = room_id, x, y, "item moved");
    let old = std::mem::replace(&mut layout.placed_items[index], candidate);
    Ok(StepUndo::Move { index, old })
}

/// Turn an item a further 90 degrees about its top-left corner.
pub fn rotate_item(
    layout: &mut Layout,
    item_id: &str,
    rules: &PlacementRules,
) -> Result<StepUndo, Rejection> {
    let index = index_of(layout, item_id)?;
    let candidate = layout.placed_items[index].rotated();
    check_in_plan(&candidate, &layout.floor_plan, &layout.placed_items, rules)?;
    trace!(item = item_id, degrees = candidate.rotation.degrees(), "item rotated");
    let old = std::mem::replace(&mut layout.placed_items[index], candidate);
    Ok(StepUndo::Rotate { index, old })
}

/// Remove an item. Deleting never needs validation; an unknown id is a no-op.
pub fn delete_item(layout: &mut Layout, item_id: &str) -> Option<StepUndo> {
    let index = index_of(layout, item_id).ok()?;
    let saved = layout.placed_items.remove(index);
    trace!(item = item_id, "item deleted");
    Some(StepUndo::Delete { index, saved })
}

/// Revert a mutation using its undo token. Tokens must be undone in
/// reverse order of the mutations that produced them; a token that no
/// longer matches the layout is refused and `false` returned.
pub fn undo_step(layout: &mut Layout, undo: StepUndo) -> bool {
    let items = &mut layout.placed_items;
    match undo {
        StepUndo::Add { index, item_id } => {
            if items.get(index).is_some_and(|item| item.id == item_id) {
                items.remove(index);
                return true;
            }
        }
        StepUndo::Move { index, old } | StepUndo::Rotate { index, old } => {
            if let Some(slot) = items.get_mut(index).filter(|item| item.id == old.id) {
                *slot = old;
                return true;
            }
        }
        StepUndo::Delete { index, saved } => {
            if index <= items.len() && !items.iter().any(|item| item.id == saved.id) {
                items.insert(index, saved);
                return true;
            }
        }
    }
    trace!("stale undo token refused");
    false
}

// -----------------------------------------------------------------
// Tests
// -----------------------------------------------------------------
