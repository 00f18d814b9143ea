//! Unit tests for raw register access: widths, byte order and write
//! protection

use crate::common::{create_mock_driver, Operation};
use mcp9808::{Error, Register};

const ALL_REGISTERS: [Register; 8] = [
    Register::Config,
    Register::UpperLimit,
    Register::LowerLimit,
    Register::CriticalLimit,
    Register::AmbientTemp,
    Register::ManufacturerId,
    Register::DeviceId,
    Register::Resolution,
];

#[test]
fn test_read_length_matches_register_width() {
    let (mut driver, interface) = create_mock_driver();

    for register in ALL_REGISTERS {
        interface.clear_operations();
        driver.read_register(register).unwrap();

        let expected = if register == Register::Resolution { 1 } else { 2 };
        let ops = interface.operations();
        assert_eq!(ops.len(), 1);
        match ops[0] {
            Operation::ReadRegister { address, length, .. } => {
                assert_eq!(address, register.address());
                assert_eq!(length, expected, "width mismatch for {:?}", register);
            }
            _ => panic!("expected a read operation"),
        }
    }
}

#[test]
fn test_read_assembles_big_endian_word() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x05, 0x0194);
    assert_eq!(driver.read_register(Register::AmbientTemp).unwrap(), 0x0194);

    interface.set_register(0x08, 0x0002);
    assert_eq!(driver.read_register(Register::Resolution).unwrap(), 0x0002);
}

#[test]
fn test_write_rejected_for_read_only_registers() {
    let (mut driver, interface) = create_mock_driver();

    for register in [
        Register::AmbientTemp,
        Register::ManufacturerId,
        Register::DeviceId,
        Register::Resolution,
    ] {
        let result = driver.write_register(register, 0x1234);
        assert_eq!(result, Err(Error::ReadOnlyRegister(register)));
    }

    // Rejection happens before any bus activity
    assert!(interface.operations().is_empty());
}

#[test]
fn test_write_to_writable_register() {
    let (mut driver, interface) = create_mock_driver();

    driver.write_register(Register::Config, 0x0201).unwrap();

    assert_eq!(interface.get_register(0x01), 0x0201);
    let ops = interface.operations();
    assert_eq!(
        ops,
        vec![Operation::WriteRegister {
            address: 0x01,
            length: 2,
            value: 0x0201,
        }]
    );
}

#[test]
fn test_write_accepted_for_whole_writable_range() {
    let (mut driver, interface) = create_mock_driver();

    for register in [
        Register::Config,
        Register::UpperLimit,
        Register::LowerLimit,
        Register::CriticalLimit,
    ] {
        driver.write_register(register, 0x00A0).unwrap();
        assert_eq!(interface.get_register(register.address()), 0x00A0);
    }
}

#[test]
fn test_read_write_round_trip() {
    let (mut driver, _interface) = create_mock_driver();

    driver.write_register(Register::UpperLimit, 0x0194).unwrap();
    assert_eq!(driver.read_register(Register::UpperLimit).unwrap(), 0x0194);
}
