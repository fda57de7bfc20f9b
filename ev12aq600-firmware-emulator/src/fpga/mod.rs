pub mod emulator;
pub mod params;
