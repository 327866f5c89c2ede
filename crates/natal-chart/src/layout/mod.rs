pub mod rings;

pub use rings::{
    build_aspect_items, build_house_items, build_planet_items, build_static_zodiac_items,
    AspectRingItem, HouseRingItem, PlanetRingItem, SignRingItem, HOUSE_COUNT,
};
