//! Unit tests for CONFIG and resolution register operations

use crate::common::{create_mock_driver, Operation};
use mcp9808::{AlertConfig, AlertMode, AlertPolarity, AlertSelect, Hysteresis, Resolution};

#[test]
fn test_set_hysteresis_bit_positions() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_hysteresis(Hysteresis::Deg1_5).unwrap();
    assert_eq!(interface.get_register(0x01), 0x0200);

    driver.set_hysteresis(Hysteresis::Deg3_0).unwrap();
    assert_eq!(interface.get_register(0x01), 0x0400);

    driver.set_hysteresis(Hysteresis::Deg6_0).unwrap();
    assert_eq!(interface.get_register(0x01), 0x0600);

    driver.set_hysteresis(Hysteresis::Deg0_0).unwrap();
    assert_eq!(interface.get_register(0x01), 0x0000);
}

#[test]
fn test_hysteresis_read_back() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x01, 0x0400);
    assert_eq!(driver.hysteresis().unwrap(), Hysteresis::Deg3_0);
}

#[test]
fn test_shutdown_preserves_other_bits() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x01, 0x0200); // 1.5C hysteresis already set

    driver.set_shutdown(true).unwrap();
    assert_eq!(interface.get_register(0x01), 0x0300);

    driver.set_shutdown(false).unwrap();
    assert_eq!(interface.get_register(0x01), 0x0200);
}

#[test]
fn test_configure_alerts_bit_mapping() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .configure_alerts(AlertConfig {
            enabled: true,
            mode: AlertMode::Interrupt,
            polarity: AlertPolarity::ActiveHigh,
            select: AlertSelect::CriticalOnly,
        })
        .unwrap();

    // alert_mode (0), polarity (1), select (2), control (3)
    assert_eq!(interface.get_register(0x01), 0x000F);

    driver.configure_alerts(AlertConfig::comparator()).unwrap();
    assert_eq!(interface.get_register(0x01), 0x0008);

    driver.configure_alerts(AlertConfig::default()).unwrap();
    assert_eq!(interface.get_register(0x01), 0x0000);
}

#[test]
fn test_alert_config_read_back() {
    let (mut driver, _interface) = create_mock_driver();

    let config = AlertConfig::interrupt();
    driver.configure_alerts(config).unwrap();
    assert_eq!(driver.alert_config().unwrap(), config);
}

#[test]
fn test_alert_output_status_bit() {
    let (mut driver, interface) = create_mock_driver();

    assert!(!driver.alert_output_asserted().unwrap());

    interface.set_register(0x01, 0x0010);
    assert!(driver.alert_output_asserted().unwrap());
}

#[test]
fn test_clear_interrupt_sets_bit_five() {
    let (mut driver, interface) = create_mock_driver();

    driver.clear_interrupt().unwrap();
    assert_eq!(interface.get_register(0x01) & 0x0020, 0x0020);
}

#[test]
fn test_lock_bits() {
    let (mut driver, interface) = create_mock_driver();

    driver.lock_temperature_window().unwrap();
    assert_eq!(interface.get_register(0x01) & 0x0040, 0x0040);

    driver.lock_critical_limit().unwrap();
    assert_eq!(interface.get_register(0x01) & 0x0080, 0x0080);
}

#[test]
fn test_set_resolution_writes_one_byte() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_resolution(Resolution::Deg0_25).unwrap();

    assert_eq!(interface.get_register(0x08), 0x0001);
    let write = interface
        .operations()
        .into_iter()
        .find(|op| matches!(op, Operation::WriteRegister { .. }))
        .expect("no write recorded");
    assert_eq!(
        write,
        Operation::WriteRegister {
            address: 0x08,
            length: 1,
            value: 0x0001,
        }
    );
}

#[test]
fn test_resolution_read_back() {
    let (mut driver, interface) = create_mock_driver();

    // Power-on default
    assert_eq!(driver.resolution().unwrap(), Resolution::Deg0_0625);

    interface.set_register(0x08, 0x0002);
    assert_eq!(driver.resolution().unwrap(), Resolution::Deg0_125);
}
