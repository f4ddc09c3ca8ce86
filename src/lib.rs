//! Biblioteca Rust para el giroscopio InvenSense MPU3050
//!
//! Esta biblioteca proporciona una interfaz para controlar el MPU3050,
//! un giroscopio de 3 ejes con sensor de temperatura interno, a través de I2C.
//!
//! ```ignore
//! let mut gyro = mpu3050_rs::new_i2c_device(i2c);
//! gyro.begin(mpu3050_rs::ADDRESS_SW_ON)?;
//! gyro.set_range(mpu3050_rs::GyroRange::Dps500)?;
//! let rate = gyro.read_rate()?;
//! ```

use embedded_hal::blocking::i2c;

// Importaciones internas
pub mod calibration;
pub mod conversion;
pub mod device;
pub mod interface;
pub mod register;
pub mod types;

// Re-exports públicos
pub use conversion::{gyro_raw_to_dps, temp_raw_to_celsius};
pub use device::{Mpu3050, Mpu3050Error};
pub use types::{Axes, GyroRange, LowPassFilter, ADDRESS_SW_OFF, ADDRESS_SW_ON};

use crate::interface::I2cInterface;

/// Crea un nuevo dispositivo MPU3050 usando el bus I2C
///
/// La dirección se indica después, en [`Mpu3050::begin`].
pub fn new_i2c_device<I, E>(i2c: I) -> Mpu3050<I2cInterface<I>>
where
    I: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
    E: core::fmt::Debug,
{
    let interface = I2cInterface::new(i2c);
    Mpu3050::new(interface)
}
