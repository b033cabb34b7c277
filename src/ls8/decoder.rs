// ls8/decoder.rs
use crate::ls8::arch::*;
use crate::ls8::errors::Ls8Error;
use crate::ls8::instruction::Instruction;
use crate::ls8::memory::Bus;

/// Número de operandos, codificado nos dois bits altos do opcode.
#[inline] pub fn operand_count(opcode: u8) -> u8 { opcode >> 6 }

/// Lê o opcode em `pc` e os bytes de operando que ele declara.
/// Não avança o PC; isso é responsabilidade do dispatcher.
pub fn decode<B: Bus>(mem: &B, pc: u8) -> Result<Instruction, Ls8Error> {
    let ir = mem.read(pc);
    let count = operand_count(ir);
    let a = if count >= 1 { mem.read(pc.wrapping_add(1)) } else { 0 };
    let b = if count == 2 { mem.read(pc.wrapping_add(2)) } else { 0 };

    Ok(match ir {
        LDI => Instruction::Ldi { reg: a, value: b },
        PRN => Instruction::Prn { reg: a },
        HLT => Instruction::Hlt,
        ADD => Instruction::Add { reg_a: a, reg_b: b },
        MUL => Instruction::Mul { reg_a: a, reg_b: b },
        PUSH => Instruction::Push { reg: a },
        POP => Instruction::Pop { reg: a },
        CALL => Instruction::Call { reg: a },
        RET => Instruction::Ret,
        JMP => Instruction::Jmp { reg: a },
        ST => Instruction::St { reg_a: a, reg_b: b },
        // declarados na tabela mas sem handler ligado
        AND | CMP | DEC | DIV | INC | INT | IRET | JEQ | JGE | JGT | JLE
        | JLT | JNE | LD | MOD | NOP | NOT | OR | PRA | SHL | SHR | SUB
        | XOR => return Err(Ls8Error::IllegalInstruction(ir)),
        _ => return Err(Ls8Error::IllegalInstruction(ir)),
    })
}
