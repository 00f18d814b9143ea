//! Integration test covering a typical monitoring workflow

use crate::common::create_mock_driver;
use crate::common::test_utils::assert_float_eq;
use mcp9808::{AlertConfig, AlertFlags, Hysteresis, Resolution};

#[test]
fn test_thermostat_workflow() {
    let (mut driver, interface) = create_mock_driver();

    // Identify the part
    assert_eq!(driver.manufacturer_id().unwrap(), 0x0054);
    let (device_id, _revision) = driver.device_id().unwrap();
    assert_eq!(device_id, 0x04);

    // Configure: finest resolution, some hysteresis, alert on all limits
    driver.set_resolution(Resolution::Deg0_0625).unwrap();
    driver.set_hysteresis(Hysteresis::Deg1_5).unwrap();
    driver.configure_alerts(AlertConfig::comparator()).unwrap();
    driver.set_temperature_window(30.0, 18.0).unwrap();
    driver.set_critical_limit(40.0).unwrap();

    assert_eq!(interface.get_register(0x02), 0x01E0);
    assert_eq!(interface.get_register(0x03), 0x0120);
    assert_eq!(interface.get_register(0x04), 0x0280);

    // Room temperature, no alerts
    interface.set_temperature(22.5);
    let reading = driver.read_ambient().unwrap();
    assert_float_eq(reading.celsius, 22.5, 1e-6);
    assert!(reading.alerts.is_empty());

    // Sensor trips the upper limit
    interface.set_temperature(31.0);
    interface.set_alert_flags(AlertFlags::ABOVE_UPPER);

    let reading = driver.read_ambient().unwrap();
    assert_float_eq(reading.celsius, 31.0, 1e-6);
    assert!(reading.alerts.contains(AlertFlags::ABOVE_UPPER));
    assert!(driver
        .check_alert_flags(AlertFlags::ABOVE_UPPER, true)
        .unwrap());
    assert!(!driver.check_alert_flags(AlertFlags::CRITICAL, false).unwrap());

    // Over-temperature: critical and upper both assert
    interface.set_temperature(41.0);
    interface.set_alert_flags(AlertFlags::CRITICAL | AlertFlags::ABOVE_UPPER);
    assert!(driver
        .check_alert_flags(AlertFlags::CRITICAL | AlertFlags::ABOVE_UPPER, true)
        .unwrap());

    // Shut the sensor down at the end of the run
    driver.set_shutdown(true).unwrap();
    assert_eq!(interface.get_register(0x01) & 0x0100, 0x0100);

    // Limits survive read-back through the driver
    assert_float_eq(driver.upper_limit().unwrap(), 30.0, 1e-6);
    assert_float_eq(driver.critical_limit().unwrap(), 40.0, 1e-6);
}

#[test]
fn test_release_returns_interface() {
    let (driver, interface) = create_mock_driver();

    let released = driver.release();
    released.set_register(0x05, 0x0100);
    assert_eq!(interface.get_register(0x05), 0x0100);
}
