use ev12aq600::{
    link::{Audit, AuditOption},
    prelude::*,
};

#[test]
fn audit_test() -> anyhow::Result<()> {
    let mut cnt = Controller::open_with_option(
        Audit::new(AuditOption {
            initial_status: 0x0000_00FF,
            ..Default::default()
        }),
        SessionOption::new().with_sleeper(VirtualSleeper::new()),
    )?;

    assert_eq!(0x0000_00FF, cnt.status()?);
    assert_eq!(
        &[0x80, 0xFF],
        cnt.transport().sent()
    );
    assert_eq!(1, cnt.transport().emulator().num_frames());

    cnt.transport_mut().break_down();
    assert!(cnt.transport().emulator().is_broken());
    assert!(cnt.status().is_err());

    cnt.transport_mut().repair();
    cnt.transport_mut().emulator_mut().fpga_mut().set_status(0x0000_0001);
    assert_eq!(0x0000_0001, cnt.status()?);
    Ok(())
}

#[test]
fn reopen_resets_emulator() -> anyhow::Result<()> {
    let mut audit = Audit::new(Default::default());
    audit.open()?;
    audit.write(&[0x00, 0x0F, 0x00, 0x00, 0x00, 0x01])?;
    assert_eq!(1, audit.emulator().fpga().peek(15));

    audit.close()?;
    audit.open()?;
    assert_eq!(0, audit.emulator().fpga().peek(15));
    assert!(audit.sent().is_empty());
    Ok(())
}
