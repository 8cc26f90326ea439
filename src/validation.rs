//! Placement rule pipeline.
//!
//! A candidate is checked against four rules in a fixed order, stopping at
//! the first failure:
//!
//! 1. containment within the room walls,
//! 2. no overlap with any other item in the room,
//! 3. appliances must rest on a hosting item (free-standing ones excepted),
//! 4. a minimum passage to the walls and to axis-separated neighbours.
//!
//! Rule 2 applies to every pair regardless of category. Since rule 3 is
//! only satisfied by an appliance lying inside its host, a hosted
//! appliance always overlaps that host and is refused at rule 2; the only
//! part of rule 3 that can decide an outcome is rejecting a floating
//! appliance.

use tracing::debug;

use crate::catalog::definition_of;
use crate::error::Rejection;
use crate::geometry::{rect_contains, rect_overlap, Rect};
use crate::spatial::{item_local_rect, room_local_rect, room_of};
use crate::support::is_floating;
use crate::types::{FloorPlan, ItemCategory, PlacedItem, PlacementRules, Room};

/// Accept/reject a candidate using the default rules.
pub fn can_place(candidate: &PlacedItem, room: &Room, all_items: &[PlacedItem]) -> bool {
    check_placement(candidate, room, all_items, &PlacementRules::default()).is_ok()
}

/// Run the pipeline and report the first rule that refused the candidate.
///
/// `all_items` may contain a previous instance of the candidate (same id);
/// it is ignored.
pub fn check_placement(
    candidate: &PlacedItem,
    room: &Room,
    all_items: &[PlacedItem],
    rules: &PlacementRules,
) -> Result<(), Rejection> {
    let result = run_rules(candidate, room, all_items, rules);
    if let Err(reason) = &result {
        debug!(item = %candidate.id, room = %room.id, %reason, "placement rejected");
    }
    result
}

/// Like [`check_placement`], resolving the target room from the
/// candidate's `room_id`.
pub fn check_in_plan(
    candidate: &PlacedItem,
    floor_plan: &FloorPlan,
    all_items: &[PlacedItem],
    rules: &PlacementRules,
) -> Result<(), Rejection> {
    let Some(room) = room_of(floor_plan, &candidate.room_id) else {
        debug!(item = %candidate.id, room = %candidate.room_id, "placement into unknown room");
        return Err(Rejection::UnknownRoom {
            room_id: candidate.room_id.clone(),
        });
    };
    check_placement(candidate, room, all_items, rules)
}

fn run_rules(
    candidate: &PlacedItem,
    room: &Room,
    all_items: &[PlacedItem],
    rules: &PlacementRules,
) -> Result<(), Rejection> {
    let def = definition_of(candidate.kind).ok_or(Rejection::UnknownKind)?;
    let bounds = item_local_rect(candidate).ok_or(Rejection::UnknownKind)?;

    if !rect_contains(&bounds, &room_local_rect(room), 0.0) {
        return Err(Rejection::OutOfBounds);
    }

    for (other, other_bounds) in neighbours(candidate, room, all_items) {
        if rect_overlap(&bounds, &other_bounds, 0.0) {
            return Err(Rejection::Overlap {
                other: other.id.clone(),
            });
        }
    }

    if def.category == ItemCategory::Appliance
        && !candidate.kind.is_free_standing()
        && is_floating(candidate, all_items)
    {
        return Err(Rejection::ApplianceFloating);
    }

    let clearance = passage_from(&bounds, room, candidate, all_items);
    if clearance < rules.min_passage_cm {
        return Err(Rejection::PassageTooNarrow {
            clearance_cm: clearance,
            required_cm: rules.min_passage_cm,
        });
    }

    Ok(())
}

/// Other items in `room` with their local rectangles.
fn neighbours<'a>(
    candidate: &'a PlacedItem,
    room: &'a Room,
    all_items: &'a [PlacedItem],
) -> impl Iterator<Item = (&'a PlacedItem, Rect)> + 'a {
    all_items
        .iter()
        .filter(move |other| other.room_id == room.id && other.id != candidate.id)
        .filter_map(|other| item_local_rect(other).map(|r| (other, r)))
}

/// Narrowest passage around `item`: the distance to each wall and to each
/// neighbour lying strictly beyond one of its sides.
///
/// Neighbours that touch or overlap on both axes impose nothing here; the
/// overlap rule is what catches them.
pub fn min_passage(item: &PlacedItem, room: &Room, all_items: &[PlacedItem]) -> Option<f64> {
    let bounds = item_local_rect(item)?;
    Some(passage_from(&bounds, room, item, all_items))
}

fn passage_from(bounds: &Rect, room: &Room, item: &PlacedItem, all_items: &[PlacedItem]) -> f64 {
    let mut passage = bounds
        .left
        .min(room.width_cm - bounds.right)
        .min(bounds.top)
        .min(room.depth_cm - bounds.bottom);

    for (_, other) in neighbours(item, room, all_items) {
        if bounds.right < other.left {
            passage = passage.min(other.left - bounds.right);
        }
        if bounds.left > other.right {
            passage = passage.min(bounds.left - other.right);
        }
        if bounds.bottom < other.top {
            passage = passage.min(other.top - bounds.bottom);
        }
        if bounds.top > other.bottom {
            passage = passage.min(bounds.top - other.bottom);
        }
    }
    passage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::is_supported;
    use crate::types::{ItemKind, RoomType, Rotation};

    fn room(id: &str, width_cm: f64, depth_cm: f64) -> Room {
        Room {
            id: id.into(),
            name: id.into(),
            room_type: RoomType::Kitchen,
            tsubo: None,
            width_cm,
            depth_cm,
            x_cm: 0.0,
            y_cm: 0.0,
        }
    }

    fn item(id: &str, kind: ItemKind, x: f64, y: f64) -> PlacedItem {
        PlacedItem {
            id: id.into(),
            kind,
            room_id: "r".into(),
            x,
            y,
            rotation: Rotation::Deg0,
        }
    }

    fn check(candidate: &PlacedItem, room: &Room, all: &[PlacedItem]) -> Result<(), Rejection> {
        check_placement(candidate, room, all, &PlacementRules::default())
    }

    fn passage(clearance_cm: f64) -> Result<(), Rejection> {
        Err(Rejection::PassageTooNarrow {
            clearance_cm,
            required_cm: 60.0,
        })
    }

    #[test]
    fn bed_flush_to_corner_fails_wall_clearance() {
        let r = room("r", 300.0, 300.0);
        let bed = item("bed", ItemKind::SingleBed, 0.0, 0.0);
        assert_eq!(check(&bed, &r, &[]), passage(0.0));
        assert!(!can_place(&bed, &r, &[]));
    }

    #[test]
    fn bed_at_sixty_short_at_bottom() {
        let r = room("r", 300.0, 300.0);
        let bed = item("bed", ItemKind::SingleBed, 60.0, 60.0);
        assert_eq!(check(&bed, &r, &[]), passage(40.0));
    }

    #[test]
    fn bed_at_seventy_still_short() {
        let r = room("r", 300.0, 300.0);
        let bed = item("bed", ItemKind::SingleBed, 70.0, 70.0);
        assert_eq!(check(&bed, &r, &[]), passage(30.0));
    }

    #[test]
    fn bed_fits_larger_room() {
        let r = room("r", 300.0, 400.0);
        let bed = item("bed", ItemKind::SingleBed, 100.0, 100.0);
        assert_eq!(check(&bed, &r, &[]), Ok(()));
        assert!(can_place(&bed, &r, &[]));
    }

    #[test]
    fn rotated_bed_needs_the_wide_wall() {
        let r = room("r", 400.0, 300.0);
        let mut bed = item("bed", ItemKind::SingleBed, 100.0, 100.0);
        assert_eq!(check(&bed, &r, &[]), passage(0.0));
        bed.rotation = Rotation::Deg90;
        assert_eq!(check(&bed, &r, &[]), Ok(()));
    }

    #[test]
    fn containment_checked_first() {
        let r = room("r", 300.0, 300.0);
        let shelf = item("shelf", ItemKind::Bookshelf, 200.0, 100.0);
        let desk = item("desk", ItemKind::Desk, 220.0, 100.0);
        assert_eq!(check(&desk, &r, &[shelf]), Err(Rejection::OutOfBounds));
    }

    #[test]
    fn negative_position_out_of_bounds() {
        let r = room("r", 300.0, 300.0);
        let shelf = item("shelf", ItemKind::Bookshelf, -10.0, 100.0);
        assert_eq!(check(&shelf, &r, &[]), Err(Rejection::OutOfBounds));
    }

    #[test]
    fn overlap_reports_other_item() {
        let r = room("r", 600.0, 600.0);
        let desk = item("desk", ItemKind::Desk, 100.0, 100.0);
        let shelf = item("shelf", ItemKind::Bookshelf, 150.0, 120.0);
        assert_eq!(
            check(&shelf, &r, &[desk]),
            Err(Rejection::Overlap {
                other: "desk".into()
            })
        );
    }

    #[test]
    fn touching_racks_fail_clearance_not_overlap() {
        let r = room("r", 600.0, 600.0);
        let first = item("rack-1", ItemKind::MicrowaveRack, 0.0, 0.0);
        let second = item("rack-2", ItemKind::MicrowaveRack, 60.0, 0.0);
        let first_rect = item_local_rect(&first).unwrap();
        let second_rect = item_local_rect(&second).unwrap();
        assert!(!rect_overlap(&first_rect, &second_rect, 0.0));
        assert_eq!(check(&second, &r, &[first]), passage(0.0));
    }

    #[test]
    fn touching_neighbour_imposes_no_passage() {
        let r = room("r", 600.0, 600.0);
        let first = item("rack-1", ItemKind::MicrowaveRack, 0.0, 100.0);
        let second = item("rack-2", ItemKind::MicrowaveRack, 60.0, 100.0);
        assert_eq!(check(&second, &r, &[first]), Ok(()));
    }

    #[test]
    fn neighbour_gap_below_threshold() {
        let r = room("r", 600.0, 600.0);
        let desk = item("desk", ItemKind::Desk, 100.0, 100.0);
        let shelf = item("shelf", ItemKind::Bookshelf, 260.0, 300.0);
        // desk right edge 220, shelf left 260
        assert_eq!(check(&shelf, &r, &[desk.clone()]), passage(40.0));
        let shelf = item("shelf", ItemKind::Bookshelf, 280.0, 300.0);
        assert_eq!(check(&shelf, &r, &[desk]), Ok(()));
    }

    #[test]
    fn items_in_other_rooms_ignored() {
        let r = room("r", 600.0, 600.0);
        let mut elsewhere = item("desk", ItemKind::Desk, 100.0, 100.0);
        elsewhere.room_id = "other".into();
        let shelf = item("shelf", ItemKind::Bookshelf, 100.0, 100.0);
        assert_eq!(check(&shelf, &r, &[elsewhere]), Ok(()));
    }

    #[test]
    fn previous_instance_is_ignored() {
        let r = room("r", 600.0, 600.0);
        let old = item("desk", ItemKind::Desk, 100.0, 100.0);
        let moved = item("desk", ItemKind::Desk, 110.0, 100.0);
        assert_eq!(check(&moved, &r, &[old]), Ok(()));
    }

    #[test]
    fn floating_microwave_rejected() {
        let r = room("r", 600.0, 600.0);
        let microwave = item("mw", ItemKind::Microwave, 200.0, 200.0);
        assert_eq!(check(&microwave, &r, &[]), Err(Rejection::ApplianceFloating));
    }

    #[test]
    fn hosted_microwave_rejected_by_overlap() {
        let r = room("r", 600.0, 600.0);
        let rack = item("rack", ItemKind::MicrowaveRack, 100.0, 100.0);
        let microwave = item("mw", ItemKind::Microwave, 105.0, 102.0);
        assert!(is_supported(&microwave, &rack));
        assert_eq!(
            check(&microwave, &r, &[rack.clone(), microwave.clone()]),
            Err(Rejection::Overlap {
                other: "rack".into()
            })
        );
        assert!(!can_place(&microwave, &r, &[rack]));
    }

    #[test]
    fn refrigerator_stands_alone() {
        let r = room("r", 300.0, 300.0);
        let fridge = item("fridge", ItemKind::Refrigerator, 100.0, 100.0);
        assert_eq!(check(&fridge, &r, &[]), Ok(()));
    }

    #[test]
    fn custom_rules_threshold() {
        let r = room("r", 300.0, 300.0);
        let bed = item("bed", ItemKind::SingleBed, 60.0, 60.0);
        let rules = PlacementRules {
            min_passage_cm: 40.0,
            ..PlacementRules::default()
        };
        assert_eq!(check_placement(&bed, &r, &[], &rules), Ok(()));
    }

    #[test]
    fn unknown_room_in_plan() {
        let plan = FloorPlan {
            name: "plan".into(),
            rooms: vec![room("r", 300.0, 300.0)],
        };
        let mut shelf = item("shelf", ItemKind::Bookshelf, 100.0, 100.0);
        assert_eq!(
            check_in_plan(&shelf, &plan, &[], &PlacementRules::default()),
            Ok(())
        );
        shelf.room_id = "gone".into();
        assert_eq!(
            check_in_plan(&shelf, &plan, &[], &PlacementRules::default()),
            Err(Rejection::UnknownRoom {
                room_id: "gone".into()
            })
        );
    }

    #[test]
    fn min_passage_counts_walls_and_neighbours() {
        let r = room("r", 500.0, 500.0);
        let desk = item("desk", ItemKind::Desk, 100.0, 100.0);
        let shelf = item("shelf", ItemKind::Bookshelf, 100.0, 250.0);
        // desk bottom 160, shelf top 250
        assert_eq!(min_passage(&shelf, &r, &[desk]), Some(90.0));
        assert_eq!(min_passage(&shelf, &r, &[]), Some(100.0));
    }
}
