pub mod icons;
pub mod storage;
pub mod theme;
pub mod timer;
