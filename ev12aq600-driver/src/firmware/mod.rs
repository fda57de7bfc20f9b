/// Register tables of the EV12AQ600 ADC.
pub mod adc;
/// FPGA register map.
pub mod fpga;
/// UART frame layer.
pub mod frame;
/// Programming tables of the external LMX2592 PLL.
pub mod pll;
