pub mod adc;
pub mod fpga;
pub mod pll;
pub mod uart;

pub use adc::AdcEmulator;
pub use fpga::emulator::FPGAEmulator;
pub use pll::PllEmulator;
pub use uart::emulator::UartEmulator;
