//! Which appliances rest on furniture that can carry them.

use crate::catalog::definition_of;
use crate::geometry::rect_contains;
use crate::spatial::item_local_rect;
use crate::types::{ItemCategory, PlacedItem};

/// True if `appliance` sits entirely on top of `host`, `host` is flagged
/// as able to carry appliances, and both share a room.
pub fn is_supported(appliance: &PlacedItem, host: &PlacedItem) -> bool {
    let (Some(appliance_def), Some(host_def)) =
        (definition_of(appliance.kind), definition_of(host.kind))
    else {
        return false;
    };
    if appliance_def.category != ItemCategory::Appliance {
        return false;
    }
    if !host_def.supports_appliances {
        return false;
    }
    if appliance.room_id != host.room_id {
        return false;
    }

    match (item_local_rect(appliance), item_local_rect(host)) {
        (Some(inner), Some(outer)) => rect_contains(&inner, &outer, 0.0),
        _ => false,
    }
}

/// True if an appliance needs a host and none of the hosting items in
/// its room carries it. Free-standing appliances and furniture never float.
pub fn is_floating(appliance: &PlacedItem, all_items: &[PlacedItem]) -> bool {
    match definition_of(appliance.kind) {
        Some(def) if def.category == ItemCategory::Appliance => {}
        _ => return false,
    }
    if appliance.kind.is_free_standing() {
        return false;
    }

    !all_items
        .iter()
        .filter(|item| {
            item.room_id == appliance.room_id
                && item.id != appliance.id
                && definition_of(item.kind).is_some_and(|d| d.supports_appliances)
        })
        .any(|host| is_supported(appliance, host))
}
