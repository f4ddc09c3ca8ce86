//! Bus de pruebas que registra cada transacción

use std::collections::HashMap;

use super::Interface;

/// Transacción registrada por [`MockBus`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Join,
    Read { address: u8, reg: u8, len: usize },
    Write { address: u8, reg: u8, value: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Bus simulado con contenido de registros y fallos programados
#[derive(Debug, Default)]
pub struct MockBus {
    pub registers: HashMap<u8, u8>,
    pub log: Vec<Transaction>,
    /// Número de escritura (empezando en 1) que debe fallar
    pub fail_write_at: Option<usize>,
    /// Falla todas las lecturas sobre este registro
    pub fail_read_reg: Option<u8>,
    /// Limita los bytes entregados por lectura
    pub short_read: Option<usize>,
    writes: usize,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus que responde como un MPU3050 en reposo
    pub fn with_device(who_am_i: u8) -> Self {
        let mut bus = Self::new();
        bus.set(crate::register::registers::WHO_AM_I, who_am_i);
        bus
    }

    pub fn set(&mut self, reg: u8, value: u8) {
        self.registers.insert(reg, value);
    }

    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.log
            .iter()
            .filter_map(|t| match t {
                Transaction::Write { reg, value, .. } => Some((*reg, *value)),
                _ => None,
            })
            .collect()
    }

    pub fn reads(&self) -> Vec<(u8, usize)> {
        self.log
            .iter()
            .filter_map(|t| match t {
                Transaction::Read { reg, len, .. } => Some((*reg, *len)),
                _ => None,
            })
            .collect()
    }

    /// Borra el registro de transacciones y reinicia la cuenta de escrituras
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.writes = 0;
    }
}

impl Interface for MockBus {
    type Error = MockError;

    fn join(&mut self) -> Result<(), Self::Error> {
        self.log.push(Transaction::Join);
        Ok(())
    }

    fn read_bytes(&mut self, address: u8, reg: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.log.push(Transaction::Read {
            address,
            reg,
            len: buf.len(),
        });
        if self.fail_read_reg == Some(reg) {
            return Err(MockError);
        }
        let n = self.short_read.map_or(buf.len(), |n| n.min(buf.len()));
        for (i, byte) in buf.iter_mut().take(n).enumerate() {
            *byte = self.registers.get(&reg.wrapping_add(i as u8)).copied().unwrap_or(0);
        }
        Ok(n)
    }

    fn write_byte(&mut self, address: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.writes += 1;
        self.log.push(Transaction::Write { address, reg, value });
        if self.fail_write_at == Some(self.writes) {
            return Err(MockError);
        }
        self.registers.insert(reg, value);
        Ok(())
    }
}
