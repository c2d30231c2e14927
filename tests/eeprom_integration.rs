//! Host integration tests
//!
//! Exercise the public API through an application-side driver, the way firmware
//! plugs in its own EEPROM registers.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use bytemuck::{Pod, Zeroable};
use pico_eeprom::platform::{EepromError, EepromInterface, Result};
use pico_eeprom::{CellPtr, Eeprom, StorageError};
use static_cell::StaticCell;

const SIZE: usize = 256;

/// Register-style driver: shared access, counts physical writes
struct RegisterDriver {
    cells: [AtomicU8; SIZE],
    writes: AtomicU32,
    reads: AtomicU32,
    ready: AtomicBool,
}

impl RegisterDriver {
    fn new() -> Self {
        Self {
            cells: core::array::from_fn(|_| AtomicU8::new(0xFF)),
            writes: AtomicU32::new(0),
            reads: AtomicU32::new(0),
            ready: AtomicBool::new(true),
        }
    }

    fn writes(&self) -> u32 {
        self.writes.load(Ordering::Relaxed)
    }

    fn reads(&self) -> u32 {
        self.reads.load(Ordering::Relaxed)
    }
}

impl EepromInterface for RegisterDriver {
    fn read_byte(&self, address: usize) -> Result<u8> {
        let cell = self.cells.get(address).ok_or(EepromError::InvalidAddress)?;
        self.reads.fetch_add(1, Ordering::Relaxed);
        Ok(cell.load(Ordering::Relaxed))
    }

    fn write_byte(&self, address: usize, value: u8) -> Result<()> {
        let cell = self.cells.get(address).ok_or(EepromError::InvalidAddress)?;
        self.writes.fetch_add(1, Ordering::Relaxed);
        cell.store(value, Ordering::Relaxed);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    fn capacity(&self) -> usize {
        SIZE
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
struct Settings {
    magic: u32,
    baud: u32,
    trim: [i16; 4],
    flags: u8,
    channel: u8,
    reserved: [u8; 2],
}

const SETTINGS: Settings = Settings {
    magic: 0x5045_4531,
    baud: 115_200,
    trim: [-3, 0, 12, -7],
    flags: 0b1010_0001,
    channel: 11,
    reserved: [0; 2],
};

#[test]
fn test_value_domain_every_address() {
    let eeprom = Eeprom::new(RegisterDriver::new());

    for cell in &eeprom {
        for value in 0..=255u8 {
            cell.write(value).unwrap();
            assert_eq!(cell.read().unwrap(), value);
        }
    }
}

#[test]
fn test_full_range_coverage() {
    let eeprom = Eeprom::new(RegisterDriver::new());

    let addresses: Vec<usize> = eeprom.iter().map(|cell| cell.address()).collect();

    assert_eq!(addresses.len(), eeprom.length());
    assert_eq!(addresses.first(), Some(&0));
    assert_eq!(addresses.last(), Some(&(eeprom.length() - 1)));
    assert!(addresses.windows(2).all(|pair| pair[1] == pair[0] + 1));

    // Walking the range touched nothing
    assert_eq!(eeprom.driver().reads(), 0);
    assert_eq!(eeprom.driver().writes(), 0);
}

#[test]
fn test_range_restarts_from_same_start() {
    let eeprom = Eeprom::new(RegisterDriver::new());

    let start = eeprom.pointer(100);
    let end = eeprom.pointer(110);
    let first: Vec<usize> = start.range_to(end).map(|c| c.address()).collect();
    let second: Vec<usize> = CellPtr::new(eeprom.driver(), 100)
        .range_to(end)
        .map(|c| c.address())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_boundary_cell() {
    let eeprom = Eeprom::new(RegisterDriver::new());
    let last = eeprom.length() - 1;

    eeprom.write(last, 0x5A).unwrap();
    assert_eq!(eeprom.read(last).unwrap(), 0x5A);
    assert_eq!((eeprom.end() - 1).cell().address(), last);
}

#[test]
fn test_object_round_trip_at_every_fitting_address() {
    let eeprom = Eeprom::new(RegisterDriver::new());
    let size = core::mem::size_of::<Settings>();

    for address in (0..=eeprom.length() - size).step_by(7) {
        eeprom.put(address, &SETTINGS).unwrap();
        let read: Settings = eeprom.get(address).unwrap();
        assert_eq!(read, SETTINGS);
    }

    // Flush right against the end
    let address = eeprom.length() - size;
    eeprom.put(address, &SETTINGS).unwrap();
    assert_eq!(eeprom.get::<Settings>(address).unwrap(), SETTINGS);
}

#[test]
fn test_update_wear_avoidance() {
    let driver = RegisterDriver::new();
    let eeprom = Eeprom::new(&driver);

    eeprom.write(5, 40).unwrap();
    let baseline = driver.writes();

    assert!(!eeprom.update(5, 40).unwrap());
    assert_eq!(driver.writes(), baseline);

    assert!(eeprom.update(5, 41).unwrap());
    assert_eq!(driver.writes(), baseline + 1);

    assert!(!eeprom.update(5, 41).unwrap());
    assert_eq!(driver.writes(), baseline + 1);
}

#[test]
fn test_put_unchanged_object_costs_no_writes() {
    let driver = RegisterDriver::new();
    let eeprom = Eeprom::new(&driver);

    eeprom.put(32, &SETTINGS).unwrap();
    let baseline = driver.writes();

    assert_eq!(eeprom.put(32, &SETTINGS).unwrap(), 0);
    assert_eq!(driver.writes(), baseline);
}

#[test]
fn test_bit_isolation_and_round_trip() {
    let eeprom = Eeprom::new(RegisterDriver::new());

    for original in 0..=255u8 {
        for index in 0..8u8 {
            eeprom.write(9, original).unwrap();
            eeprom.write_bit(9, index, true).unwrap();
            assert_eq!(eeprom.read(9).unwrap(), original | (1 << index));
            assert!(eeprom.read_bit(9, index).unwrap());

            eeprom.write_bit(9, index, false).unwrap();
            assert_eq!(eeprom.read(9).unwrap(), original & !(1 << index));
            assert!(!eeprom.read_bit(9, index).unwrap());
        }
    }
}

#[test]
fn test_counter_through_pointer_indexing() {
    let eeprom = Eeprom::new(RegisterDriver::new());
    let base = eeprom.pointer(64);

    base.at(0).write(0).unwrap();
    for _ in 0..300 {
        base.at(0).increment().unwrap();
    }
    // 300 wraps past 255
    assert_eq!(base.cell().read().unwrap(), 44);

    base.at(1).copy_from(&base.at(0)).unwrap();
    assert_eq!(eeprom.read(65).unwrap(), 44);
}

#[test]
fn test_guarded_modify() {
    let eeprom = Eeprom::new(RegisterDriver::new());
    eeprom.write(0, 0b0000_0011).unwrap();

    let value = eeprom.cell(0).modify_guarded(|v| v << 2).unwrap();
    assert_eq!(value, 0b0000_1100);
    assert_eq!(eeprom.read(0).unwrap(), 0b0000_1100);
}

#[test]
fn test_driver_errors_surface_unchanged() {
    let eeprom = Eeprom::new(RegisterDriver::new());

    let err = eeprom.end().cell().read().unwrap_err();
    assert_eq!(err, StorageError::from(EepromError::InvalidAddress));
}

#[test]
fn test_ready_is_reported_not_enforced() {
    let driver = RegisterDriver::new();
    let eeprom = Eeprom::new(&driver);

    driver.ready.store(false, Ordering::Relaxed);
    assert!(!eeprom.ready());

    // This driver completes the access anyway
    eeprom.write(1, 2).unwrap();
    assert_eq!(eeprom.read(1).unwrap(), 2);
}

#[test]
fn test_static_instance() {
    static EEPROM: StaticCell<Eeprom<RegisterDriver>> = StaticCell::new();

    let eeprom: &'static Eeprom<RegisterDriver> = EEPROM.init(Eeprom::new(RegisterDriver::new()));

    fn boot_count(eeprom: &'static Eeprom<RegisterDriver>) -> u8 {
        eeprom.cell(0).post_increment().unwrap()
    }

    eeprom.write(0, 0).unwrap();
    assert_eq!(boot_count(eeprom), 0);
    assert_eq!(boot_count(eeprom), 1);
    assert_eq!(eeprom.read(0).unwrap(), 2);
}
