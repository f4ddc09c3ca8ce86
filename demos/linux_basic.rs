use linux_embedded_hal::I2cdev;
use mpu3050_rs::{self, calibration, GyroRange, LowPassFilter, ADDRESS_SW_ON};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

fn main() {
    println!("MPU3050 - Ejemplo básico");

    // Flag para controlar la ejecución del programa
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    // Configurar el manejador para Ctrl+C
    ctrlc::set_handler(move || {
        println!("\nDeteniendo el programa...");
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error al configurar el manejador de Ctrl+C");

    // Crear instancia de I2C para Linux
    let i2c = match I2cdev::new("/dev/i2c-1") {
        Ok(i2c) => i2c,
        Err(e) => {
            eprintln!("Error al abrir dispositivo I2C: {:?}", e);
            return;
        }
    };

    let mut device = mpu3050_rs::new_i2c_device(i2c);

    // Inicializar el dispositivo con el interruptor de dirección en ON
    if let Err(e) = device.begin(ADDRESS_SW_ON) {
        eprintln!("Error al inicializar el dispositivo: {}", e);
        return;
    }
    println!("Dispositivo inicializado correctamente");

    if let Err(e) = device.set_filter_bandwidth(LowPassFilter::Hz42) {
        eprintln!("Error al configurar el filtro paso bajo: {}", e);
    }
    if let Err(e) = device.set_range(GyroRange::Dps500) {
        eprintln!("Error al configurar la escala del giroscopio: {}", e);
    }

    // Calibración con el sensor en reposo
    match calibration::calibrate(&mut device, 100) {
        Ok(offsets) => println!(
            "Offsets escritos: x={}, y={}, z={} (guárdalos para el próximo arranque)",
            offsets.x, offsets.y, offsets.z
        ),
        Err(e) => eprintln!("Error al calibrar: {}", e),
    }

    println!("Leyendo datos. Presiona Ctrl+C para detener...");

    while running.load(Ordering::SeqCst) {
        match device.read_rate() {
            Ok(rate) => println!(
                "Giroscopio: x={:.2}°/s, y={:.2}°/s, z={:.2}°/s",
                rate.x, rate.y, rate.z
            ),
            Err(e) => eprintln!("Error al leer giroscopio: {}", e),
        }

        match device.read_temperature() {
            Ok(temp) => println!("Temperatura: {:.2}°C", temp),
            Err(e) => eprintln!("Error al leer temperatura: {}", e),
        }
        println!("-------------------");
        thread::sleep(Duration::from_millis(200));
    }

    println!("Ejemplo finalizado");
}
