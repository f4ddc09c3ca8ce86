//! Definiciones de tipos y constantes comunes para el MPU3050

use crate::device::Mpu3050Error;

/// Dirección I2C con el interruptor de dirección en ON
pub const ADDRESS_SW_ON: u8 = 0x68;
/// Dirección I2C con el interruptor de dirección en OFF
pub const ADDRESS_SW_OFF: u8 = 0x69;

/// Ancho de banda del filtro paso bajo digital (DLPF_CFG)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LowPassFilter {
    /// 256 Hz
    Hz256 = 0,
    /// 188 Hz
    Hz188 = 1,
    /// 98 Hz
    Hz98 = 2,
    /// 42 Hz
    Hz42 = 3,
    /// 20 Hz
    Hz20 = 4,
    /// 10 Hz
    Hz10 = 5,
    /// 5 Hz
    Hz5 = 6,
}

impl Default for LowPassFilter {
    fn default() -> Self {
        LowPassFilter::Hz188
    }
}

impl LowPassFilter {
    /// Código de 3 bits escrito en DLPF_CFG
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Frecuencia de corte en Hz
    pub fn hz(self) -> u16 {
        match self {
            LowPassFilter::Hz256 => 256,
            LowPassFilter::Hz188 => 188,
            LowPassFilter::Hz98 => 98,
            LowPassFilter::Hz42 => 42,
            LowPassFilter::Hz20 => 20,
            LowPassFilter::Hz10 => 10,
            LowPassFilter::Hz5 => 5,
        }
    }
}

impl TryFrom<u8> for LowPassFilter {
    type Error = Mpu3050Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LowPassFilter::Hz256),
            1 => Ok(LowPassFilter::Hz188),
            2 => Ok(LowPassFilter::Hz98),
            3 => Ok(LowPassFilter::Hz42),
            4 => Ok(LowPassFilter::Hz20),
            5 => Ok(LowPassFilter::Hz10),
            6 => Ok(LowPassFilter::Hz5),
            _ => Err(Mpu3050Error::FilterOutOfRange(value)),
        }
    }
}

/// Escalas completas disponibles para el giroscopio (FS_SEL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GyroRange {
    /// ±250 dps
    Dps250 = 0,
    /// ±500 dps
    Dps500 = 1,
    /// ±1000 dps
    Dps1000 = 2,
    /// ±2000 dps
    Dps2000 = 3,
}

impl Default for GyroRange {
    fn default() -> Self {
        GyroRange::Dps250
    }
}

impl GyroRange {
    /// Código de 2 bits escrito en FS_SEL
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Valor máximo representable en grados/segundo
    pub fn dps(self) -> u16 {
        match self {
            GyroRange::Dps250 => 250,
            GyroRange::Dps500 => 500,
            GyroRange::Dps1000 => 1000,
            GyroRange::Dps2000 => 2000,
        }
    }

    /// Sensibilidad en LSB/(°/s)
    pub fn sensitivity(self) -> f64 {
        match self {
            GyroRange::Dps250 => 131.0,
            GyroRange::Dps500 => 65.5,
            GyroRange::Dps1000 => 32.8,
            GyroRange::Dps2000 => 16.4,
        }
    }
}

impl TryFrom<u8> for GyroRange {
    type Error = Mpu3050Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GyroRange::Dps250),
            1 => Ok(GyroRange::Dps500),
            2 => Ok(GyroRange::Dps1000),
            3 => Ok(GyroRange::Dps2000),
            _ => Err(Mpu3050Error::RangeOutOfRange(value)),
        }
    }
}

/// Valor por eje del giroscopio
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Axes<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Axes<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Aplica `f` a cada eje
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Axes<U> {
        Axes {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
}

impl<T: Copy> Axes<T> {
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T> From<[T; 3]> for Axes<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}
