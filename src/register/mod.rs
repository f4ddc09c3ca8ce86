//! Definiciones de registros para el MPU3050
//!
//! Todas las direcciones son absolutas; el MPU3050 no tiene bancos.

/// Registros del MPU3050
pub mod registers {
    // Registro de identificación
    pub const WHO_AM_I: u8 = 0x00;

    // Registros de offset del giroscopio (MSB primero)
    pub const X_OFFS_USRH: u8 = 0x0C;
    pub const X_OFFS_USRL: u8 = 0x0D;
    pub const Y_OFFS_USRH: u8 = 0x0E;
    pub const Y_OFFS_USRL: u8 = 0x0F;
    pub const Z_OFFS_USRH: u8 = 0x10;
    pub const Z_OFFS_USRL: u8 = 0x11;

    // Filtro paso bajo y escala completa
    pub const DLPF_FS_SYNC: u8 = 0x16;

    // Temperatura
    pub const TEMP_OUT_H: u8 = 0x1B;
    pub const TEMP_OUT_L: u8 = 0x1C;

    // Datos del giroscopio: X, Y, Z
    pub const GYRO_XOUT_H: u8 = 0x1D;
    pub const GYRO_XOUT_L: u8 = 0x1E;
    pub const GYRO_YOUT_H: u8 = 0x1F;
    pub const GYRO_YOUT_L: u8 = 0x20;
    pub const GYRO_ZOUT_H: u8 = 0x21;
    pub const GYRO_ZOUT_L: u8 = 0x22;

    /// Pares (MSB, LSB) de los registros de offset, en orden X, Y, Z
    pub const OFFSET_PAIRS: [(u8, u8); 3] = [
        (X_OFFS_USRH, X_OFFS_USRL),
        (Y_OFFS_USRH, Y_OFFS_USRL),
        (Z_OFFS_USRH, Z_OFFS_USRL),
    ];
}

/// Bits útiles para configuración e identificación
pub mod bits {
    /// Bits 6:1 de WHO_AM_I; el bit 0 refleja el pin AD0 y el bit 7 está reservado
    pub const WHO_AM_I_MASK: u8 = 0x7E;
    /// Firma esperada tras aplicar la máscara
    pub const WHO_AM_I_VALUE: u8 = 0x68;

    /// DLPF_CFG, bits [2:0]
    pub const DLPF_CFG: u8 = 0x07;
    /// FS_SEL, bits [4:3]
    pub const FS_SEL: u8 = 0x18;
    pub const FS_SEL_SHIFT: u8 = 3;
    /// Bits válidos de DLPF_FS_SYNC; EXT_SYNC_SET [7:5] siempre a cero
    pub const DLPF_FS_MASK: u8 = 0x1F;
}

/// Longitudes de lectura en ráfaga
pub mod lengths {
    pub const WHO_AM_I: usize = 1;
    pub const TEMP: usize = 2;
    pub const GYRO_XYZ: usize = 6;
}
