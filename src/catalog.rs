//! Fixed catalog of placeable furniture and appliances.

use crate::types::{ItemCategory, ItemDefinition, ItemKind};

/// Pointer positions snap to this many centimetres.
pub const GRID_SIZE_CM: f64 = 10.0;

/// Narrowest passage allowed next to any placed item.
pub const MIN_PASSAGE_WIDTH_CM: f64 = 60.0;

const fn furniture(
    kind: ItemKind,
    name: &'static str,
    width_cm: f64,
    depth_cm: f64,
) -> ItemDefinition {
    ItemDefinition {
        kind,
        name,
        category: ItemCategory::Furniture,
        width_cm,
        depth_cm,
        supports_appliances: false,
    }
}

const fn host(
    kind: ItemKind,
    name: &'static str,
    width_cm: f64,
    depth_cm: f64,
) -> ItemDefinition {
    ItemDefinition {
        supports_appliances: true,
        ..furniture(kind, name, width_cm, depth_cm)
    }
}

const fn appliance(
    kind: ItemKind,
    name: &'static str,
    width_cm: f64,
    depth_cm: f64,
) -> ItemDefinition {
    ItemDefinition {
        category: ItemCategory::Appliance,
        ..furniture(kind, name, width_cm, depth_cm)
    }
}

pub static ITEM_DEFINITIONS: [ItemDefinition; 12] = [
    furniture(ItemKind::SingleBed, "Single bed", 100.0, 200.0),
    furniture(ItemKind::SemiDoubleBed, "Semi-double bed", 120.0, 200.0),
    furniture(ItemKind::TwoSeatSofa, "Two-seat sofa", 150.0, 80.0),
    furniture(ItemKind::Desk, "Desk", 120.0, 60.0),
    furniture(ItemKind::Table, "Table", 120.0, 75.0),
    host(ItemKind::TvStand, "TV stand", 120.0, 40.0),
    furniture(ItemKind::Bookshelf, "Bookshelf", 60.0, 30.0),
    furniture(ItemKind::ColorBox, "Color box", 42.0, 29.0),
    host(ItemKind::MicrowaveRack, "Microwave rack", 60.0, 45.0),
    appliance(ItemKind::Refrigerator, "Refrigerator", 60.0, 65.0),
    appliance(ItemKind::Microwave, "Microwave", 50.0, 40.0),
    appliance(ItemKind::Toaster, "Toaster oven", 35.0, 35.0),
];

/// Catalog entry for `kind`, or `None` when the catalog has no such entry.
pub fn definition_of(kind: ItemKind) -> Option<&'static ItemDefinition> {
    ITEM_DEFINITIONS.iter().find(|def| def.kind == kind)
}

pub fn furniture_items() -> impl Iterator<Item = &'static ItemDefinition> {
    by_category(ItemCategory::Furniture)
}

pub fn appliance_items() -> impl Iterator<Item = &'static ItemDefinition> {
    by_category(ItemCategory::Appliance)
}

fn by_category(category: ItemCategory) -> impl Iterator<Item = &'static ItemDefinition> {
    ITEM_DEFINITIONS
        .iter()
        .filter(move |def| def.category == category)
}
