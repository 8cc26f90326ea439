//! Rejection reasons and typed conversion errors.

/// Why a candidate placement was refused.
///
/// A rejection is an ordinary outcome of validation, not a fault: the caller
/// keeps its last committed state and may offer another candidate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("item extends beyond the room walls")]
    OutOfBounds,

    #[error("item overlaps `{other}`")]
    Overlap { other: String },

    #[error("appliance is not resting on furniture that can host it")]
    ApplianceFloating,

    #[error("passage of {clearance_cm} cm is narrower than {required_cm} cm")]
    PassageTooNarrow { clearance_cm: f64, required_cm: f64 },

    #[error("item kind has no catalog definition")]
    UnknownKind,

    #[error("room `{room_id}` is not part of the floor plan")]
    UnknownRoom { room_id: String },

    #[error("item `{item_id}` is not placed")]
    UnknownItem { item_id: String },

    #[error("pointer is not over any room")]
    OutsideFloorPlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rotation must be 0, 90, 180 or 270 degrees, got {0}")]
pub struct RotationError(pub u16);
