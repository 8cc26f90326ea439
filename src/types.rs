//! Data types for rooms, catalog entries and placed items.
//!
//! Every struct here derives Serialize + Deserialize (catalog entries
//! only serialize) so a layout can cross the UI boundary as plain data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RotationError;
use crate::geometry::Size;

// -- Rooms ---------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    LivingRoom,
    Bedroom,
    Kitchen,
    Bathroom,
    Hallway,
    Closet,
    DiningRoom,
}

/// A room placed on the floor plan. Position is the global top-left
/// corner; items inside it use the room-local frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub room_type: RoomType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsubo: Option<f64>,
    pub width_cm: f64,
    pub depth_cm: f64,
    #[serde(default)]
    pub x_cm: f64,
    #[serde(default)]
    pub y_cm: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloorPlan {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

// -- Catalog -------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Furniture,
    Appliance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    SingleBed,
    SemiDoubleBed,
    #[serde(rename = "2seat-sofa")]
    TwoSeatSofa,
    Desk,
    Table,
    TvStand,
    Bookshelf,
    ColorBox,
    MicrowaveRack,
    Refrigerator,
    Microwave,
    Toaster,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::SingleBed => "single-bed",
            ItemKind::SemiDoubleBed => "semi-double-bed",
            ItemKind::TwoSeatSofa => "2seat-sofa",
            ItemKind::Desk => "desk",
            ItemKind::Table => "table",
            ItemKind::TvStand => "tv-stand",
            ItemKind::Bookshelf => "bookshelf",
            ItemKind::ColorBox => "color-box",
            ItemKind::MicrowaveRack => "microwave-rack",
            ItemKind::Refrigerator => "refrigerator",
            ItemKind::Microwave => "microwave",
            ItemKind::Toaster => "toaster",
        }
    }

    /// Appliances that stand on the floor and never need a host.
    pub fn is_free_standing(self) -> bool {
        matches!(self, ItemKind::Refrigerator)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static catalog entry. Dimensions are unrotated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDefinition {
    pub kind: ItemKind,
    pub name: &'static str,
    pub category: ItemCategory,
    pub width_cm: f64,
    pub depth_cm: f64,
    #[serde(skip_serializing_if = "is_false")]
    pub supports_appliances: bool,
}

impl ItemDefinition {
    pub fn footprint(&self) -> Size {
        Size {
            width_cm: self.width_cm,
            depth_cm: self.depth_cm,
        }
    }
}

fn is_false(v: &bool) -> bool {
    !v
}

// -- Placed items --------------------------------------------------

/// Quarter-turn rotation, serialized as its degree value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// The rotation a quarter turn further on, wrapping at 360.
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// True when width and depth trade places.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl TryFrom<u16> for Rotation {
    type Error = RotationError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(RotationError(other)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// An item on the plan. `x`/`y` are in the owning room's local frame,
/// origin at the room's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub room_id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: Rotation,
}

impl PlacedItem {
    /// Copy of this item moved to `(x, y)` inside `room_id`.
    pub fn relocated(&self, room_id: &str, x: f64, y: f64) -> Self {
        PlacedItem {
            id: self.id.clone(),
            kind: self.kind,
            room_id: room_id.to_owned(),
            x,
            y,
            rotation: self.rotation,
        }
    }

    /// Copy of this item turned a further 90 degrees in place.
    pub fn rotated(&self) -> Self {
        PlacedItem {
            rotation: self.rotation.next(),
            ..self.clone()
        }
    }
}

// -- Layout --------------------------------------------------------

/// Committed state: the floor plan and every item placed on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub floor_plan: FloorPlan,
    #[serde(default)]
    pub placed_items: Vec<PlacedItem>,
}

// -- Rules ---------------------------------------------------------

fn default_min_passage_cm() -> f64 {
    crate::catalog::MIN_PASSAGE_WIDTH_CM
}

fn default_grid_size_cm() -> f64 {
    crate::catalog::GRID_SIZE_CM
}

/// Tunable thresholds for the placement pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRules {
    #[serde(default = "default_min_passage_cm")]
    pub min_passage_cm: f64,
    #[serde(default = "default_grid_size_cm")]
    pub grid_size_cm: f64,
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            min_passage_cm: default_min_passage_cm(),
            grid_size_cm: default_grid_size_cm(),
        }
    }
}

// -- Tests ---------------------------------------------------------
