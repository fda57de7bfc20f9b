use ev12aq600::prelude::*;

const EXPECTED_CHIP_ID: u32 = 0x0914;

pub fn get_status(cnt: &mut Controller<impl Transport, impl Sleep>) -> anyhow::Result<()> {
    println!("Status: {:#010X}", cnt.status()?);
    println!("HDL version: {:#010X}", cnt.hdl_version()?);

    cnt.deactivate_adc_rstn()?;
    cnt.spi_ss_adc()?;
    match cnt.adc_chip_id()? {
        EXPECTED_CHIP_ID => println!("Chip ID valid ({EXPECTED_CHIP_ID:#06X})"),
        id => println!("Chip ID error: {id:#06X}"),
    }

    Ok(())
}
