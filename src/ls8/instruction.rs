// ls8/instruction.rs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Ldi{ reg:u8, value:u8 },
    Prn{ reg:u8 },
    Hlt,
    Add{ reg_a:u8, reg_b:u8 }, Mul{ reg_a:u8, reg_b:u8 },
    Push{ reg:u8 }, Pop{ reg:u8 },
    Call{ reg:u8 }, Ret, Jmp{ reg:u8 },
    St{ reg_a:u8, reg_b:u8 },
}

impl Instruction {
    /// Instructions that write the PC themselves; the dispatcher must not
    /// advance it after they run.
    #[inline]
    pub fn sets_pc(&self) -> bool {
        matches!(
            self,
            Instruction::Call { .. } | Instruction::Ret | Instruction::Jmp { .. }
        )
    }
}
