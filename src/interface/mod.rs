//! Módulo de abstracción para el bus de comunicación con el MPU3050

use core::fmt::Debug;
use embedded_hal::blocking::i2c;

#[cfg(feature = "linux")]
use linux_embedded_hal::i2cdev::linux::LinuxI2CError;

#[cfg(test)]
pub(crate) mod mock;

/// Error genérico para interfaces de comunicación
#[derive(Debug, Clone)]
pub enum InterfaceError<E> {
    /// Error de comunicación I2C
    I2cError(E),
    /// Parámetro inválido
    InvalidParameter,
}

#[cfg(feature = "linux")]
impl From<LinuxI2CError> for InterfaceError<LinuxI2CError> {
    fn from(error: LinuxI2CError) -> Self {
        InterfaceError::I2cError(error)
    }
}

/// Trait para abstraer el transporte de bytes con el dispositivo
///
/// Cada transacción es completa: termina o falla antes de retornar.
pub trait Interface {
    /// Tipo de error que puede producir la interfaz
    type Error: Debug;

    /// Se une al bus como maestro. Debe ser idempotente.
    fn join(&mut self) -> Result<(), Self::Error> {
        // Por defecto no hace nada, se implementa en las implementaciones específicas
        Ok(())
    }

    /// Escribe el puntero de registro y lee `buf.len()` bytes en ráfaga.
    ///
    /// Retorna el número de bytes realmente recibidos.
    fn read_bytes(&mut self, address: u8, reg: u8, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Escribe el puntero de registro seguido de un byte de datos
    fn write_byte(&mut self, address: u8, reg: u8, value: u8) -> Result<(), Self::Error>;
}

/// Implementación de Interface para I2C
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C, E> I2cInterface<I2C>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
{
    /// Crea una nueva interfaz I2C
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consume la interfaz y devuelve el dispositivo I2C subyacente
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Interface for I2cInterface<I2C>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
    E: Debug,
{
    type Error = InterfaceError<E>;

    fn read_bytes(&mut self, address: u8, reg: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Err(InterfaceError::InvalidParameter);
        }

        self.i2c
            .write_read(address, &[reg], buf)
            .map_err(InterfaceError::I2cError)?;

        // write_read solo retorna Ok cuando el buffer se ha llenado
        Ok(buf.len())
    }

    fn write_byte(&mut self, address: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c
            .write(address, &[reg, value])
            .map_err(InterfaceError::I2cError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bus I2C mínimo que recuerda la última transacción
    #[derive(Default)]
    struct FakeI2c {
        last_write: Vec<(u8, Vec<u8>)>,
        response: Vec<u8>,
        fail: bool,
    }

    impl i2c::Write for FakeI2c {
        type Error = ();

        fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.last_write.push((address, bytes.to_vec()));
            Ok(())
        }
    }

    impl i2c::WriteRead for FakeI2c {
        type Error = ();

        fn write_read(&mut self, address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.last_write.push((address, bytes.to_vec()));
            buffer.copy_from_slice(&self.response[..buffer.len()]);
            Ok(())
        }
    }

    #[test]
    fn test_write_byte_sends_register_then_value() {
        let mut iface = I2cInterface::new(FakeI2c::default());
        iface.write_byte(0x68, 0x16, 0x19).unwrap();
        let i2c = iface.release();
        assert_eq!(i2c.last_write, vec![(0x68, vec![0x16, 0x19])]);
    }

    #[test]
    fn test_read_bytes_reports_length() {
        let fake = FakeI2c {
            response: vec![0xAA, 0xBB],
            ..Default::default()
        };
        let mut iface = I2cInterface::new(fake);
        let mut buf = [0u8; 2];
        assert_eq!(iface.read_bytes(0x69, 0x1B, &mut buf).unwrap(), 2);
        assert_eq!(buf, [0xAA, 0xBB]);
        assert_eq!(iface.release().last_write, vec![(0x69, vec![0x1B])]);
    }

    #[test]
    fn test_errors_are_wrapped() {
        let fake = FakeI2c {
            fail: true,
            ..Default::default()
        };
        let mut iface = I2cInterface::new(fake);
        let mut buf = [0u8; 1];
        assert!(matches!(
            iface.read_bytes(0x68, 0x00, &mut buf),
            Err(InterfaceError::I2cError(()))
        ));
        assert!(matches!(iface.write_byte(0x68, 0x16, 0), Err(InterfaceError::I2cError(()))));
        assert!(matches!(
            iface.read_bytes(0x68, 0x00, &mut []),
            Err(InterfaceError::InvalidParameter)
        ));
    }
}
