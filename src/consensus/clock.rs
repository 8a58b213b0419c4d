//! Fonte de tempo usada para carimbar resoluções.

use chrono::{DateTime, Utc};

/// Relógio substituível.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Relógio do sistema.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Relógio parado em um instante fixo.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
