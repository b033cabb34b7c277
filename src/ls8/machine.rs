// ls8/machine.rs
use std::time::{Duration, Instant};

use crate::ls8::errors::Ls8Error;
use crate::ls8::exec;
use crate::ls8::memory::{Bus, Ram};
use crate::ls8::registers::Cpu;

/// Período do interrupt de timer (bit 0 do IS).
const TIMER_PERIOD: Duration = Duration::from_secs(60);

/// A máquina inteira: registradores, memória e o loop de execução.
pub struct Machine {
    pub cpu: Cpu,
    pub ram: Ram,
    /// imprime uma linha TRACE no stderr antes de cada instrução
    pub tracing: bool,
}

impl Machine {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::default(),
            ram: Ram::new(),
            tracing: false,
        }
    }

    /// Writes `program` into memory starting at address 0. The caller
    /// guarantees the bytes fit; the file loader checks before calling.
    pub fn load(&mut self, program: &[u8]) {
        let mut addr = 0u8;
        for &b in program {
            self.ram.write(addr, b);
            addr = addr.wrapping_add(1);
        }
    }

    /// Runs until HLT or a fault. The timer mark is polled once per cycle:
    /// when wall-clock time passes it, IS bit 0 goes up and the mark re-arms.
    pub fn run(&mut self) -> Result<(), Ls8Error> {
        let mut timer_mark = Instant::now() + TIMER_PERIOD;
        loop {
            if Instant::now() >= timer_mark {
                let is = self.cpu.is();
                self.cpu.set_is(is | 0b0000_0001);
                timer_mark = Instant::now() + TIMER_PERIOD;
            }
            if self.tracing {
                eprintln!("{}", self.trace());
            }
            if !exec::step(&mut self.cpu, &mut self.ram)? {
                return Ok(());
            }
        }
    }

    /// `TRACE: PC | próximos três bytes | R0..R7`, tudo em hex de 2 dígitos.
    pub fn trace(&self) -> String {
        let pc = self.cpu.pc;
        let mut out = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            pc,
            self.ram.read(pc),
            self.ram.read(pc.wrapping_add(1)),
            self.ram.read(pc.wrapping_add(2)),
        );
        for i in 0..8 {
            out.push_str(&format!(" {:02X}", self.cpu.r[i]));
        }
        out
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ls8::arch::{HLT, LDI, MUL, PRN};

    #[test]
    fn load_then_run_prints_and_halts() {
        let mut machine = Machine::new();
        machine.load(&[LDI, 0, 8, PRN, 0, HLT]);
        machine.run().expect("run");
        assert_eq!(machine.cpu.stdout, b"8\n");
    }

    #[test]
    fn two_fresh_machines_agree() {
        let program = [LDI, 0, 10, LDI, 1, 5, MUL, 0, 1, PRN, 0, HLT];
        let mut first = Machine::new();
        first.load(&program);
        first.run().expect("run");
        let mut second = Machine::new();
        second.load(&program);
        second.run().expect("run");
        assert_eq!(first.cpu.stdout, second.cpu.stdout);
        assert_eq!(first.cpu.stdout, b"50\n");
    }

    #[test]
    fn trace_renders_pc_next_bytes_and_registers() {
        let mut machine = Machine::new();
        machine.load(&[LDI, 0, 8]);
        assert_eq!(
            machine.trace(),
            "TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4"
        );
    }
}
