//! Estimación de offsets del giroscopio
//!
//! Con el sensor en reposo se promedian varias lecturas y la media se
//! convierte a la escala de ±1000 °/s, que es la que asumen los registros
//! de offset del MPU3050. Guardar los valores entre reinicios es tarea del
//! usuario; basta con volver a pasarlos a [`Mpu3050::set_offsets`].

use crate::device::{Mpu3050, Mpu3050Error};
use crate::interface::Interface;
use crate::types::{Axes, GyroRange};
use log::debug;

/// Promedia `samples` lecturas y devuelve los offsets en LSB de ±1000 °/s
///
/// El sensor debe estar quieto. Los offsets ya cargados en el dispositivo
/// afectan a las lecturas, así que el resultado es el residuo sobre ellos.
pub fn estimate_offsets<I, E>(
    device: &mut Mpu3050<I>,
    samples: u16,
) -> Result<Axes<i16>, Mpu3050Error>
where
    I: Interface<Error = E>,
    E: core::fmt::Debug,
{
    if samples == 0 {
        return Err(Mpu3050Error::InvalidParameter);
    }

    let mut sum = Axes::<i64>::default();
    for _ in 0..samples {
        let raw = device.read_raw()?;
        sum.x += i64::from(raw.x);
        sum.y += i64::from(raw.y);
        sum.z += i64::from(raw.z);
    }

    let scale = GyroRange::Dps1000.sensitivity() / device.range().sensitivity();
    let offsets = sum.map(|s| {
        let mean = s as f64 / f64::from(samples);
        (mean * scale)
            .round()
            .clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
    });

    debug!(
        "Offsets estimados con {} muestras a ±{} dps: {:?}",
        samples,
        device.range().dps(),
        offsets
    );
    Ok(offsets)
}

/// Borra los offsets, los estima de nuevo y los escribe en el dispositivo
///
/// Retorna los valores escritos para que el usuario pueda guardarlos.
pub fn calibrate<I, E>(device: &mut Mpu3050<I>, samples: u16) -> Result<Axes<i16>, Mpu3050Error>
where
    I: Interface<Error = E>,
    E: core::fmt::Debug,
{
    if samples == 0 {
        return Err(Mpu3050Error::InvalidParameter);
    }

    device.set_offsets(0, 0, 0)?;
    let offsets = estimate_offsets(device, samples)?;
    device.set_offsets(offsets.x, offsets.y, offsets.z)?;
    Ok(offsets)
}
