pub mod notice;
pub mod preview;
pub mod theme;
