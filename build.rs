use std::env;

fn main() {
    // Mock EEPROM geometry (optional)
    // These are used as defaults by MockEeprom::new() on host builds

    // Capacity in bytes (default: 1024, ATmega328P)
    if let Ok(capacity) = env::var("EEPROM_MOCK_CAPACITY") {
        println!("cargo:rustc-env=EEPROM_MOCK_CAPACITY={}", capacity);
        println!(
            "cargo:warning=Using EEPROM_MOCK_CAPACITY from environment: {}",
            capacity
        );
    } else {
        println!("cargo:rustc-env=EEPROM_MOCK_CAPACITY=1024");
    }

    // Erased cell value (default: 255, i.e. 0xFF)
    if let Ok(erased) = env::var("EEPROM_MOCK_ERASED") {
        println!("cargo:rustc-env=EEPROM_MOCK_ERASED={}", erased);
        println!(
            "cargo:warning=Using EEPROM_MOCK_ERASED from environment: {}",
            erased
        );
    } else {
        println!("cargo:rustc-env=EEPROM_MOCK_ERASED=255");
    }

    // Rerun if environment variables change
    println!("cargo:rerun-if-env-changed=EEPROM_MOCK_CAPACITY");
    println!("cargo:rerun-if-env-changed=EEPROM_MOCK_ERASED");
}
