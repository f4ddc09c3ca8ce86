use crate::conversion::{self, decode_axes, gyro_raw_to_dps, pack_dlpf, split_i16, temp_raw_to_celsius};
use crate::interface::Interface;
use crate::register::{bits, lengths, registers};
use crate::types::{Axes, GyroRange, LowPassFilter};
use log::{debug, info, warn};
use thiserror::Error;

/// Controlador del giroscopio MPU3050
///
/// Se crea sin inicializar; hay que llamar a [`Mpu3050::begin`] antes que a
/// cualquier otro método. Una instancia no es segura para uso concurrente sin
/// sincronización externa.
pub struct Mpu3050<I> {
    pub(crate) interface: I,
    pub(crate) state: DeviceState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Mpu3050Error {
    #[error("dispositivo no inicializado, falta llamar a begin()")]
    NotInitialized,
    #[error("dispositivo ya inicializado")]
    AlreadyInitialized,
    #[error("WHO_AM_I inesperado: {id:#04x}")]
    WrongDevice { id: u8 },
    #[error("error de lectura en el bus")]
    ReadFailed,
    #[error("error de escritura en el bus")]
    WriteFailed,
    #[error("código de filtro paso bajo fuera de rango: {0}")]
    FilterOutOfRange(u8),
    #[error("código de escala fuera de rango: {0}")]
    RangeOutOfRange(u8),
    /// La escala almacenada es inválida. No se produce mientras la escala se
    /// guarde como [`GyroRange`].
    #[error("escala almacenada inválida")]
    InvalidRange,
    #[error("parámetro inválido")]
    InvalidParameter,
}

/// Estado del dispositivo MPU3050
#[derive(Debug, Clone)]
pub struct DeviceState {
    /// Dirección I2C; `None` hasta que `begin` termina correctamente
    pub address: Option<u8>,
    pub filter: LowPassFilter,
    pub range: GyroRange,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            address: None,
            filter: LowPassFilter::default(),
            range: GyroRange::default(),
        }
    }
}

impl<I, E> Mpu3050<I>
where
    I: Interface<Error = E>,
    E: core::fmt::Debug,
{
    /// Create a new, uninitialized instance of Mpu3050
    pub fn new(interface: I) -> Self {
        Self {
            interface,
            state: DeviceState::default(),
        }
    }

    /// Consume el controlador y devuelve la interfaz subyacente
    pub fn release(self) -> I {
        self.interface
    }

    /// Se conecta al dispositivo, comprueba su identidad y aplica la
    /// configuración por defecto (188 Hz, ±250 °/s).
    ///
    /// Si la escritura de configuración falla, el controlador vuelve al estado
    /// no inicializado. Llamar a `begin` sobre un controlador ya inicializado
    /// retorna [`Mpu3050Error::AlreadyInitialized`] sin tocar el bus.
    pub fn begin(&mut self, address: u8) -> Result<(), Mpu3050Error> {
        if self.state.address.is_some() {
            return Err(Mpu3050Error::AlreadyInitialized);
        }

        self.interface.join().map_err(|e| {
            warn!("No se pudo unir al bus I2C: {:?}", e);
            Mpu3050Error::ReadFailed
        })?;

        // Comprobar que hablamos con el dispositivo correcto
        let mut id = [0u8; lengths::WHO_AM_I];
        self.read_at(address, registers::WHO_AM_I, &mut id)?;
        if id[0] & bits::WHO_AM_I_MASK != bits::WHO_AM_I_VALUE {
            warn!("WHO_AM_I en {:#04x} = {:#04x}, no es un MPU3050", address, id[0]);
            return Err(Mpu3050Error::WrongDevice { id: id[0] });
        }

        self.apply_config(address, LowPassFilter::default(), GyroRange::default())?;
        self.state.address = Some(address);

        info!("MPU3050 inicializado en {:#04x}", address);
        Ok(())
    }

    /// Indica si `begin` ha terminado correctamente
    pub fn is_ready(&self) -> bool {
        self.state.address.is_some()
    }

    /// Dirección I2C del dispositivo, si está inicializado
    pub fn address(&self) -> Option<u8> {
        self.state.address
    }

    /// Filtro paso bajo confirmado por el dispositivo
    pub fn filter(&self) -> LowPassFilter {
        self.state.filter
    }

    /// Escala completa confirmada por el dispositivo
    pub fn range(&self) -> GyroRange {
        self.state.range
    }

    /// Lee los valores brutos de los tres ejes
    pub fn read_raw(&mut self) -> Result<Axes<i16>, Mpu3050Error> {
        let mut data = [0u8; lengths::GYRO_XYZ];
        self.read_regs(registers::GYRO_XOUT_H, &mut data)?;
        Ok(decode_axes(&data))
    }

    /// Lee la velocidad angular en grados/segundo
    pub fn read_rate(&mut self) -> Result<Axes<f64>, Mpu3050Error> {
        let raw = self.read_raw()?;
        Ok(gyro_raw_to_dps(raw, self.state.range))
    }

    /// Lee el valor bruto del sensor de temperatura
    pub fn read_raw_temperature(&mut self) -> Result<i16, Mpu3050Error> {
        let mut data = [0u8; lengths::TEMP];
        self.read_regs(registers::TEMP_OUT_H, &mut data)?;
        Ok(conversion::combine_i16(data[0], data[1]))
    }

    /// Lee la temperatura interna en grados Celsius
    pub fn read_temperature(&mut self) -> Result<f64, Mpu3050Error> {
        let raw = self.read_raw_temperature()?;
        Ok(temp_raw_to_celsius(raw))
    }

    /// Configura el filtro paso bajo manteniendo la escala actual
    pub fn set_filter_bandwidth(&mut self, filter: LowPassFilter) -> Result<(), Mpu3050Error> {
        self.configure(filter.code(), self.state.range.code())
    }

    /// Configura el filtro paso bajo a partir de su código (0-6)
    pub fn set_filter_bandwidth_code(&mut self, code: u8) -> Result<(), Mpu3050Error> {
        self.configure(code, self.state.range.code())
    }

    /// Configura la escala completa manteniendo el filtro actual
    pub fn set_range(&mut self, range: GyroRange) -> Result<(), Mpu3050Error> {
        self.configure(self.state.filter.code(), range.code())
    }

    /// Configura la escala completa a partir de su código (0-3)
    pub fn set_range_code(&mut self, code: u8) -> Result<(), Mpu3050Error> {
        self.configure(self.state.filter.code(), code)
    }

    /// Escribe filtro y escala en una sola escritura del registro DLPF_FS_SYNC.
    ///
    /// Los códigos se validan antes de cualquier acceso al bus. El estado en
    /// memoria solo se actualiza cuando el dispositivo confirma la escritura,
    /// así que tras un `WriteFailed` `filter()` y `range()` siguen devolviendo
    /// los valores anteriores.
    ///
    /// Después de escribir se hace una lectura de datos descartada para que el
    /// nuevo filtro se aplique. Su resultado se ignora.
    pub fn configure(&mut self, filter: u8, range: u8) -> Result<(), Mpu3050Error> {
        let address = self.ready_address()?;
        let filter = LowPassFilter::try_from(filter)?;
        let range = GyroRange::try_from(range)?;
        self.apply_config(address, filter, range)
    }

    /// Relee DLPF_FS_SYNC y sincroniza el estado en memoria con el dispositivo
    pub fn read_config(&mut self) -> Result<(LowPassFilter, GyroRange), Mpu3050Error> {
        let mut data = [0u8; 1];
        self.read_regs(registers::DLPF_FS_SYNC, &mut data)?;

        let (filter_code, range_code) = conversion::unpack_dlpf(data[0]);
        let filter = LowPassFilter::try_from(filter_code)?;
        let range = GyroRange::try_from(range_code)?;

        self.state.filter = filter;
        self.state.range = range;
        Ok((filter, range))
    }

    /// Escribe los offsets de calibración de los tres ejes.
    ///
    /// Se detiene en el primer eje que falla; los ejes ya escritos no se revierten.
    pub fn set_offsets(&mut self, x: i16, y: i16, z: i16) -> Result<(), Mpu3050Error> {
        let address = self.ready_address()?;

        for ((reg_msb, reg_lsb), value) in registers::OFFSET_PAIRS.into_iter().zip([x, y, z]) {
            let (msb, lsb) = split_i16(value);
            self.write_at(address, reg_msb, msb)?;
            self.write_at(address, reg_lsb, lsb)?;
        }

        debug!("Offsets escritos: x={} y={} z={}", x, y, z);
        Ok(())
    }

    fn apply_config(
        &mut self,
        address: u8,
        filter: LowPassFilter,
        range: GyroRange,
    ) -> Result<(), Mpu3050Error> {
        let value = pack_dlpf(filter, range);
        debug!(
            "DLPF_FS_SYNC <- {:#04x} ({} Hz, ±{} dps)",
            value,
            filter.hz(),
            range.dps()
        );
        self.write_at(address, registers::DLPF_FS_SYNC, value)?;

        self.state.filter = filter;
        self.state.range = range;

        // Lectura descartada para aplicar el nuevo filtro
        let mut discard = [0u8; lengths::GYRO_XYZ];
        if let Err(e) = self.read_at(address, registers::GYRO_XOUT_H, &mut discard) {
            debug!("Lectura tras configurar ignorada: {}", e);
        }

        Ok(())
    }

    fn ready_address(&self) -> Result<u8, Mpu3050Error> {
        self.state.address.ok_or(Mpu3050Error::NotInitialized)
    }

    /// Lee registros consecutivos del dispositivo inicializado
    pub(crate) fn read_regs(&mut self, reg: u8, data: &mut [u8]) -> Result<(), Mpu3050Error> {
        let address = self.ready_address()?;
        self.read_at(address, reg, data)
    }

    fn read_at(&mut self, address: u8, reg: u8, data: &mut [u8]) -> Result<(), Mpu3050Error> {
        let len = data.len();
        match self.interface.read_bytes(address, reg, data) {
            Ok(n) if n == len => Ok(()),
            Ok(n) => {
                warn!("Lectura corta en {:#04x}: {} de {} bytes", reg, n, len);
                Err(Mpu3050Error::ReadFailed)
            }
            Err(e) => {
                warn!("Error de lectura en {:#04x}: {:?}", reg, e);
                Err(Mpu3050Error::ReadFailed)
            }
        }
    }

    fn write_at(&mut self, address: u8, reg: u8, value: u8) -> Result<(), Mpu3050Error> {
        self.interface.write_byte(address, reg, value).map_err(|e| {
            warn!("Error de escritura en {:#04x}: {:?}", reg, e);
            Mpu3050Error::WriteFailed
        })
    }
}
