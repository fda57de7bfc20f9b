use ev12aq600::{link::Nop, prelude::*};

#[test]
fn nop_test() -> anyhow::Result<()> {
    let mut cnt = Controller::open_with_option(
        Nop::new(),
        SessionOption::new().with_sleeper(VirtualSleeper::new()),
    )?;

    assert_eq!(0x0000_0000, cnt.status()?);
    cnt.deactivate_adc_rstn()?;
    cnt.spi_ss_adc()?;
    assert_eq!(0x0914, cnt.adc_chip_id()?);

    cnt.close()?;
    Ok(())
}

#[test]
fn closed_nop() -> anyhow::Result<()> {
    let mut nop = Nop::new();
    assert!(!nop.is_open());
    assert!(nop.write(&[0x00, 0x02]).is_err());

    nop.open()?;
    assert!(nop.is_open());
    nop.close()?;
    assert!(!nop.is_open());
    Ok(())
}
