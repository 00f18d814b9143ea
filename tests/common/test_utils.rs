//! Test utilities and helper functions

use crate::common::mock_interface::MockInterface;
use mcp9808::Mcp9808Driver;

/// Create a mock driver for testing
/// Returns (driver, interface) where interface is a clone that shares state
/// with the driver
pub fn create_mock_driver() -> (Mcp9808Driver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver = Mcp9808Driver::new(interface).expect("Failed to create mock driver");
    // Drop the ID verification reads from the log so tests start clean
    interface_clone.clear_operations();
    (driver, interface_clone)
}

/// Assert that two floating point values are approximately equal
#[allow(dead_code)]
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    let diff = (a - b).abs();
    assert!(
        diff < epsilon,
        "Values not equal within epsilon: {} vs {} (diff: {}, epsilon: {})",
        a,
        b,
        diff,
        epsilon
    );
}
