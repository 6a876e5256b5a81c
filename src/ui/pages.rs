//! Pages module
//! One full-page view per control screen

pub mod dial;
pub mod stagger;
pub mod vertical;
