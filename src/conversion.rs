//! Funciones de conversión para datos del sensor MPU3050
//!
//! Este módulo proporciona funciones para convertir datos raw del sensor
//! a unidades físicas (grados por segundo y grados Celsius), y para
//! empaquetar y desempaquetar los valores que se escriben en los registros.

use crate::register::bits;
use crate::types::{Axes, GyroRange, LowPassFilter};

/// Offset de temperatura ambiente del sensor (LSB)
pub const TEMP_ROOM_OFFSET: i32 = 13200;
/// Sensibilidad del sensor de temperatura (LSB/°C)
pub const TEMP_SENSITIVITY: f64 = 280.0;
/// Temperatura de referencia (°C)
pub const TEMP_BIAS_C: f64 = 35.0;

/// Combina dos bytes en un entero de 16 bits con signo en complemento a dos
#[inline]
pub fn combine_i16(msb: u8, lsb: u8) -> i16 {
    ((u16::from(msb) << 8) | u16::from(lsb)) as i16
}

/// Divide un entero de 16 bits con signo en (MSB, LSB)
///
/// Ambos bytes se extraen con máscara, sin extensión de signo.
#[inline]
pub fn split_i16(value: i16) -> (u8, u8) {
    let msb = ((value >> 8) & 0x00FF) as u8;
    let lsb = (value & 0x00FF) as u8;
    (msb, lsb)
}

/// Decodifica la ráfaga de datos X, Y, Z (MSB primero en cada eje)
pub fn decode_axes(data: &[u8; 6]) -> Axes<i16> {
    Axes {
        x: combine_i16(data[0], data[1]),
        y: combine_i16(data[2], data[3]),
        z: combine_i16(data[4], data[5]),
    }
}

/// Empaqueta filtro y escala en el valor del registro DLPF_FS_SYNC
///
/// bits[2:0] = DLPF_CFG, bits[4:3] = FS_SEL, bits[7:5] = 0
pub fn pack_dlpf(filter: LowPassFilter, range: GyroRange) -> u8 {
    (filter.code() | (range.code() << bits::FS_SEL_SHIFT)) & bits::DLPF_FS_MASK
}

/// Devuelve los códigos crudos (filtro, escala) del valor del registro DLPF_FS_SYNC
pub fn unpack_dlpf(value: u8) -> (u8, u8) {
    (
        value & bits::DLPF_CFG,
        (value & bits::FS_SEL) >> bits::FS_SEL_SHIFT,
    )
}

/// Convierte datos brutos de giroscopio a grados/segundo según la escala configurada
///
/// # Arguments
/// * `raw` - Valores brutos del giroscopio
/// * `range` - Escala completa configurada
///
/// # Returns
/// Velocidad angular en grados/segundo
pub fn gyro_raw_to_dps(raw: Axes<i16>, range: GyroRange) -> Axes<f64> {
    let divisor = range.sensitivity();
    raw.map(|v| f64::from(v) / divisor)
}

/// Convierte datos brutos de temperatura a grados Celsius
///
/// Temp °C = ((TEMP_OUT + 13200) / 280) + 35, en ese orden.
pub fn temp_raw_to_celsius(raw: i16) -> f64 {
    let shifted = i32::from(raw) + TEMP_ROOM_OFFSET;
    let mut celsius = f64::from(shifted) / TEMP_SENSITIVITY;
    celsius += TEMP_BIAS_C;
    celsius
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_split_combine_round_trip() {
        for value in [i16::MIN, -32767, -256, -255, -1, 0, 1, 255, 256, 0x1234, i16::MAX] {
            let (msb, lsb) = split_i16(value);
            assert_eq!(combine_i16(msb, lsb), value);
        }
        assert_eq!(split_i16(-1), (0xFF, 0xFF));
        assert_eq!(split_i16(i16::MIN), (0x80, 0x00));
        assert_eq!(split_i16(i16::MAX), (0x7F, 0xFF));
    }

    #[test]
    fn test_decode_axes() {
        let raw = decode_axes(&[0x00, 0x83, 0xFF, 0xFF, 0x80, 0x00]);
        assert_eq!(raw, Axes::new(131, -1, i16::MIN));
    }

    #[test]
    fn test_pack_dlpf_all_codes() {
        for f in 0..=6u8 {
            for r in 0..=3u8 {
                let filter = LowPassFilter::try_from(f).unwrap();
                let range = GyroRange::try_from(r).unwrap();
                let byte = pack_dlpf(filter, range);
                assert_eq!(byte, f | (r << 3));
                assert_eq!(byte & 0xE0, 0);
                assert_eq!(unpack_dlpf(byte), (f, r));
            }
        }
        assert_eq!(pack_dlpf(LowPassFilter::Hz188, GyroRange::Dps250), 0x01);
        assert_eq!(pack_dlpf(LowPassFilter::Hz5, GyroRange::Dps2000), 0x1E);
    }

    #[test]
    fn test_unpack_ignores_sync_bits() {
        assert_eq!(unpack_dlpf(0xFF), (7, 3));
        assert_eq!(unpack_dlpf(0xE9), (1, 1));
    }

    #[test]
    fn test_gyro_raw_to_dps() {
        let one = gyro_raw_to_dps(Axes::new(131, -131, 0), GyroRange::Dps250);
        assert!((one.x - 1.0).abs() < EPS);
        assert!((one.y + 1.0).abs() < EPS);
        assert_eq!(one.z, 0.0);

        let cases = [
            (655, GyroRange::Dps500),
            (328, GyroRange::Dps1000),
            (164, GyroRange::Dps2000),
        ];
        for (raw, range) in cases {
            let dps = gyro_raw_to_dps(Axes::new(raw, raw, raw), range);
            assert!((dps.x - 10.0).abs() < EPS, "{:?} -> {}", range, dps.x);
        }
    }

    #[test]
    fn test_temp_raw_to_celsius() {
        let expected = (0.0 + 13200.0) / 280.0 + 35.0;
        assert_eq!(temp_raw_to_celsius(0), expected);
        assert!((temp_raw_to_celsius(0) - 82.142857142857).abs() < 1e-9);
        assert!((temp_raw_to_celsius(-13200) - 35.0).abs() < EPS);
        // Sin desbordamiento en los extremos
        assert!(temp_raw_to_celsius(i16::MAX) > temp_raw_to_celsius(0));
        assert!(temp_raw_to_celsius(i16::MIN) < temp_raw_to_celsius(0));
    }
}
