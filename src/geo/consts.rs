use crate::geo::models::BearingDirection;

/// Mean Earth radius, km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Bounds of the reference coordinate domain (the Indonesian archipelago).
pub const MIN_LATITUDE: f64 = -11.0;
pub const MAX_LATITUDE: f64 = 6.0;
pub const MIN_LONGITUDE: f64 = 95.0;
pub const MAX_LONGITUDE: f64 = 141.0;

/// Great-circle diagonal of the reference domain, rounded up. Used as the
/// denominator of the closeness percentage.
pub const MAX_DISTANCE_KM: f64 = 5431.0;

pub const AT_TARGET: BearingDirection = BearingDirection {
    emoji: "📍",
    label: "at the target city",
};

pub const EIGHT_POINT_COMPASS: [BearingDirection; 8] = [
    BearingDirection { emoji: "⬆️", label: "north" },
    BearingDirection { emoji: "↗️", label: "northeast" },
    BearingDirection { emoji: "➡️", label: "east" },
    BearingDirection { emoji: "↘️", label: "southeast" },
    BearingDirection { emoji: "⬇️", label: "south" },
    BearingDirection { emoji: "↙️", label: "southwest" },
    BearingDirection { emoji: "⬅️", label: "west" },
    BearingDirection { emoji: "↖️", label: "northwest" },
];

pub const SIXTEEN_POINT_COMPASS: [BearingDirection; 16] = [
    BearingDirection { emoji: "⬆️", label: "north" },
    BearingDirection { emoji: "⬆️", label: "north-northeast" },
    BearingDirection { emoji: "↗️", label: "northeast" },
    BearingDirection { emoji: "➡️", label: "east-northeast" },
    BearingDirection { emoji: "➡️", label: "east" },
    BearingDirection { emoji: "➡️", label: "east-southeast" },
    BearingDirection { emoji: "↘️", label: "southeast" },
    BearingDirection { emoji: "⬇️", label: "south-southeast" },
    BearingDirection { emoji: "⬇️", label: "south" },
    BearingDirection { emoji: "⬇️", label: "south-southwest" },
    BearingDirection { emoji: "↙️", label: "southwest" },
    BearingDirection { emoji: "⬅️", label: "west-southwest" },
    BearingDirection { emoji: "⬅️", label: "west" },
    BearingDirection { emoji: "⬅️", label: "west-northwest" },
    BearingDirection { emoji: "↖️", label: "northwest" },
    BearingDirection { emoji: "⬆️", label: "north-northwest" },
];
