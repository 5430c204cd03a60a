use crate::structure::{
    FuncIdx, GlobalIdx, LabelIdx, LocalIdx, MemArg, MemIdx, ResultType, TableIdx, TypeIdx,
};
use num::BigInt;

pub const END: u8 = 0x0b;
pub const ELSE: u8 = 0x05;

#[derive(Debug, Clone, PartialEq)]
pub enum Instr {
    // control
    Unreachable,
    Nop,
    Block(ResultType, Vec<Instr>),
    Loop(ResultType, Vec<Instr>),
    If(ResultType, Vec<Instr>),
    IfElse(ResultType, Vec<Instr>, Vec<Instr>),
    Br(LabelIdx),
    BrIf(LabelIdx),
    BrTable(Vec<LabelIdx>, LabelIdx),
    Return,
    Call(FuncIdx),
    CallIndirect(TypeIdx, TableIdx),

    // parametric
    Drop,
    Select,

    // variable
    LocalGet(LocalIdx),
    LocalSet(LocalIdx),
    LocalTee(LocalIdx),
    GlobalGet(GlobalIdx),
    GlobalSet(GlobalIdx),

    // memory
    I32Load(MemArg),
    I64Load(MemArg),
    F32Load(MemArg),
    F64Load(MemArg),
    I32Load8S(MemArg),
    I32Load8U(MemArg),
    I32Load16S(MemArg),
    I32Load16U(MemArg),
    I64Load8S(MemArg),
    I64Load8U(MemArg),
    I64Load16S(MemArg),
    I64Load16U(MemArg),
    I64Load32S(MemArg),
    I64Load32U(MemArg),
    I32Store(MemArg),
    I64Store(MemArg),
    F32Store(MemArg),
    F64Store(MemArg),
    I32Store8(MemArg),
    I32Store16(MemArg),
    I64Store8(MemArg),
    I64Store16(MemArg),
    I64Store32(MemArg),
    MemorySize(MemIdx),
    MemoryGrow(MemIdx),

    // constants, checked as bit patterns of their width
    I32Const(BigInt),
    I64Const(BigInt),
    F32Const(f32),
    F64Const(f64),

    // inn.itestop / inn.irelop
    I32Eqz,
    I32Eq,
    I32Ne,
    I32LtS,
    I32LtU,
    I32GtS,
    I32GtU,
    I32LeS,
    I32LeU,
    I32GeS,
    I32GeU,
    I64Eqz,
    I64Eq,
    I64Ne,
    I64LtS,
    I64LtU,
    I64GtS,
    I64GtU,
    I64LeS,
    I64LeU,
    I64GeS,
    I64GeU,

    // fnn.frelop
    F32Eq,
    F32Ne,
    F32Lt,
    F32Gt,
    F32Le,
    F32Ge,
    F64Eq,
    F64Ne,
    F64Lt,
    F64Gt,
    F64Le,
    F64Ge,

    // inn.iunop / inn.ibinop
    I32Clz,
    I32Ctz,
    I32Popcnt,
    I32Add,
    I32Sub,
    I32Mul,
    I32DivS,
    I32DivU,
    I32RemS,
    I32RemU,
    I32And,
    I32Or,
    I32Xor,
    I32Shl,
    I32ShrS,
    I32ShrU,
    I32Rotl,
    I32Rotr,
    I64Clz,
    I64Ctz,
    I64Popcnt,
    I64Add,
    I64Sub,
    I64Mul,
    I64DivS,
    I64DivU,
    I64RemS,
    I64RemU,
    I64And,
    I64Or,
    I64Xor,
    I64Shl,
    I64ShrS,
    I64ShrU,
    I64Rotl,
    I64Rotr,

    // fnn.funop / fnn.fbinop
    F32Abs,
    F32Neg,
    F32Ceil,
    F32Floor,
    F32Trunc,
    F32Nearest,
    F32Sqrt,
    F32Add,
    F32Sub,
    F32Mul,
    F32Div,
    F32Min,
    F32Max,
    F32CopySign,
    F64Abs,
    F64Neg,
    F64Ceil,
    F64Floor,
    F64Trunc,
    F64Nearest,
    F64Sqrt,
    F64Add,
    F64Sub,
    F64Mul,
    F64Div,
    F64Min,
    F64Max,
    F64CopySign,

    // conversions
    I32WrapI64,
    I32TruncF32S,
    I32TruncF32U,
    I32TruncF64S,
    I32TruncF64U,
    I64ExtendI32S,
    I64ExtendI32U,
    I64TruncF32S,
    I64TruncF32U,
    I64TruncF64S,
    I64TruncF64U,
    F32ConvertI32S,
    F32ConvertI32U,
    F32ConvertI64S,
    F32ConvertI64U,
    F32DemoteF64,
    F64ConvertI32S,
    F64ConvertI32U,
    F64ConvertI64S,
    F64ConvertI64U,
    F64PromoteF32,
    I32ReinterpretF32,
    I64ReinterpretF64,
    F32ReinterpretI32,
    F64ReinterpretI64,
}

impl Instr {
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::Unreachable => 0x00,
            Self::Nop => 0x01,
            Self::Block(..) => 0x02,
            Self::Loop(..) => 0x03,
            Self::If(..) | Self::IfElse(..) => 0x04,
            Self::Br(..) => 0x0c,
            Self::BrIf(..) => 0x0d,
            Self::BrTable(..) => 0x0e,
            Self::Return => 0x0f,
            Self::Call(..) => 0x10,
            Self::CallIndirect(..) => 0x11,
            Self::Drop => 0x1a,
            Self::Select => 0x1b,
            Self::LocalGet(..) => 0x20,
            Self::LocalSet(..) => 0x21,
            Self::LocalTee(..) => 0x22,
            Self::GlobalGet(..) => 0x23,
            Self::GlobalSet(..) => 0x24,
            Self::I32Load(..) => 0x28,
            Self::I64Load(..) => 0x29,
            Self::F32Load(..) => 0x2a,
            Self::F64Load(..) => 0x2b,
            Self::I32Load8S(..) => 0x2c,
            Self::I32Load8U(..) => 0x2d,
            Self::I32Load16S(..) => 0x2e,
            Self::I32Load16U(..) => 0x2f,
            Self::I64Load8S(..) => 0x30,
            Self::I64Load8U(..) => 0x31,
            Self::I64Load16S(..) => 0x32,
            Self::I64Load16U(..) => 0x33,
            Self::I64Load32S(..) => 0x34,
            Self::I64Load32U(..) => 0x35,
            Self::I32Store(..) => 0x36,
            Self::I64Store(..) => 0x37,
            Self::F32Store(..) => 0x38,
            Self::F64Store(..) => 0x39,
            Self::I32Store8(..) => 0x3a,
            Self::I32Store16(..) => 0x3b,
            Self::I64Store8(..) => 0x3c,
            Self::I64Store16(..) => 0x3d,
            Self::I64Store32(..) => 0x3e,
            Self::MemorySize(..) => 0x3f,
            Self::MemoryGrow(..) => 0x40,
            Self::I32Const(..) => 0x41,
            Self::I64Const(..) => 0x42,
            Self::F32Const(..) => 0x43,
            Self::F64Const(..) => 0x44,
            Self::I32Eqz => 0x45,
            Self::I32Eq => 0x46,
            Self::I32Ne => 0x47,
            Self::I32LtS => 0x48,
            Self::I32LtU => 0x49,
            Self::I32GtS => 0x4a,
            Self::I32GtU => 0x4b,
            Self::I32LeS => 0x4c,
            Self::I32LeU => 0x4d,
            Self::I32GeS => 0x4e,
            Self::I32GeU => 0x4f,
            Self::I64Eqz => 0x50,
            Self::I64Eq => 0x51,
            Self::I64Ne => 0x52,
            Self::I64LtS => 0x53,
            Self::I64LtU => 0x54,
            Self::I64GtS => 0x55,
            Self::I64GtU => 0x56,
            Self::I64LeS => 0x57,
            Self::I64LeU => 0x58,
            Self::I64GeS => 0x59,
            Self::I64GeU => 0x5a,
            Self::F32Eq => 0x5b,
            Self::F32Ne => 0x5c,
            Self::F32Lt => 0x5d,
            Self::F32Gt => 0x5e,
            Self::F32Le => 0x5f,
            Self::F32Ge => 0x60,
            Self::F64Eq => 0x61,
            Self::F64Ne => 0x62,
            Self::F64Lt => 0x63,
            Self::F64Gt => 0x64,
            Self::F64Le => 0x65,
            Self::F64Ge => 0x66,
            Self::I32Clz => 0x67,
            Self::I32Ctz => 0x68,
            Self::I32Popcnt => 0x69,
            Self::I32Add => 0x6a,
            Self::I32Sub => 0x6b,
            Self::I32Mul => 0x6c,
            Self::I32DivS => 0x6d,
            Self::I32DivU => 0x6e,
            Self::I32RemS => 0x6f,
            Self::I32RemU => 0x70,
            Self::I32And => 0x71,
            Self::I32Or => 0x72,
            Self::I32Xor => 0x73,
            Self::I32Shl => 0x74,
            Self::I32ShrS => 0x75,
            Self::I32ShrU => 0x76,
            Self::I32Rotl => 0x77,
            Self::I32Rotr => 0x78,
            Self::I64Clz => 0x79,
            Self::I64Ctz => 0x7a,
            Self::I64Popcnt => 0x7b,
            Self::I64Add => 0x7c,
            Self::I64Sub => 0x7d,
            Self::I64Mul => 0x7e,
            Self::I64DivS => 0x7f,
            Self::I64DivU => 0x80,
            Self::I64RemS => 0x81,
            Self::I64RemU => 0x82,
            Self::I64And => 0x83,
            Self::I64Or => 0x84,
            Self::I64Xor => 0x85,
            Self::I64Shl => 0x86,
            Self::I64ShrS => 0x87,
            Self::I64ShrU => 0x88,
            Self::I64Rotl => 0x89,
            Self::I64Rotr => 0x8a,
            Self::F32Abs => 0x8b,
            Self::F32Neg => 0x8c,
            Self::F32Ceil => 0x8d,
            Self::F32Floor => 0x8e,
            Self::F32Trunc => 0x8f,
            Self::F32Nearest => 0x90,
            Self::F32Sqrt => 0x91,
            Self::F32Add => 0x92,
            Self::F32Sub => 0x93,
            Self::F32Mul => 0x94,
            Self::F32Div => 0x95,
            Self::F32Min => 0x96,
            Self::F32Max => 0x97,
            Self::F32CopySign => 0x98,
            Self::F64Abs => 0x99,
            Self::F64Neg => 0x9a,
            Self::F64Ceil => 0x9b,
            Self::F64Floor => 0x9c,
            Self::F64Trunc => 0x9d,
            Self::F64Nearest => 0x9e,
            Self::F64Sqrt => 0x9f,
            Self::F64Add => 0xa0,
            Self::F64Sub => 0xa1,
            Self::F64Mul => 0xa2,
            Self::F64Div => 0xa3,
            Self::F64Min => 0xa4,
            Self::F64Max => 0xa5,
            Self::F64CopySign => 0xa6,
            Self::I32WrapI64 => 0xa7,
            Self::I32TruncF32S => 0xa8,
            Self::I32TruncF32U => 0xa9,
            Self::I32TruncF64S => 0xaa,
            Self::I32TruncF64U => 0xab,
            Self::I64ExtendI32S => 0xac,
            Self::I64ExtendI32U => 0xad,
            Self::I64TruncF32S => 0xae,
            Self::I64TruncF32U => 0xaf,
            Self::I64TruncF64S => 0xb0,
            Self::I64TruncF64U => 0xb1,
            Self::F32ConvertI32S => 0xb2,
            Self::F32ConvertI32U => 0xb3,
            Self::F32ConvertI64S => 0xb4,
            Self::F32ConvertI64U => 0xb5,
            Self::F32DemoteF64 => 0xb6,
            Self::F64ConvertI32S => 0xb7,
            Self::F64ConvertI32U => 0xb8,
            Self::F64ConvertI64S => 0xb9,
            Self::F64ConvertI64U => 0xba,
            Self::F64PromoteF32 => 0xbb,
            Self::I32ReinterpretF32 => 0xbc,
            Self::I64ReinterpretF64 => 0xbd,
            Self::F32ReinterpretI32 => 0xbe,
            Self::F64ReinterpretI64 => 0xbf,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashSet;

    pub(crate) fn bare_instrs() -> Vec<Instr> {
        vec![
            Instr::Unreachable,
            Instr::Nop,
            Instr::Return,
            Instr::Drop,
            Instr::Select,
            Instr::I32Eqz,
            Instr::I32Eq,
            Instr::I32Ne,
            Instr::I32LtS,
            Instr::I32LtU,
            Instr::I32GtS,
            Instr::I32GtU,
            Instr::I32LeS,
            Instr::I32LeU,
            Instr::I32GeS,
            Instr::I32GeU,
            Instr::I64Eqz,
            Instr::I64Eq,
            Instr::I64Ne,
            Instr::I64LtS,
            Instr::I64LtU,
            Instr::I64GtS,
            Instr::I64GtU,
            Instr::I64LeS,
            Instr::I64LeU,
            Instr::I64GeS,
            Instr::I64GeU,
            Instr::F32Eq,
            Instr::F32Ne,
            Instr::F32Lt,
            Instr::F32Gt,
            Instr::F32Le,
            Instr::F32Ge,
            Instr::F64Eq,
            Instr::F64Ne,
            Instr::F64Lt,
            Instr::F64Gt,
            Instr::F64Le,
            Instr::F64Ge,
            Instr::I32Clz,
            Instr::I32Ctz,
            Instr::I32Popcnt,
            Instr::I32Add,
            Instr::I32Sub,
            Instr::I32Mul,
            Instr::I32DivS,
            Instr::I32DivU,
            Instr::I32RemS,
            Instr::I32RemU,
            Instr::I32And,
            Instr::I32Or,
            Instr::I32Xor,
            Instr::I32Shl,
            Instr::I32ShrS,
            Instr::I32ShrU,
            Instr::I32Rotl,
            Instr::I32Rotr,
            Instr::I64Clz,
            Instr::I64Ctz,
            Instr::I64Popcnt,
            Instr::I64Add,
            Instr::I64Sub,
            Instr::I64Mul,
            Instr::I64DivS,
            Instr::I64DivU,
            Instr::I64RemS,
            Instr::I64RemU,
            Instr::I64And,
            Instr::I64Or,
            Instr::I64Xor,
            Instr::I64Shl,
            Instr::I64ShrS,
            Instr::I64ShrU,
            Instr::I64Rotl,
            Instr::I64Rotr,
            Instr::F32Abs,
            Instr::F32Neg,
            Instr::F32Ceil,
            Instr::F32Floor,
            Instr::F32Trunc,
            Instr::F32Nearest,
            Instr::F32Sqrt,
            Instr::F32Add,
            Instr::F32Sub,
            Instr::F32Mul,
            Instr::F32Div,
            Instr::F32Min,
            Instr::F32Max,
            Instr::F32CopySign,
            Instr::F64Abs,
            Instr::F64Neg,
            Instr::F64Ceil,
            Instr::F64Floor,
            Instr::F64Trunc,
            Instr::F64Nearest,
            Instr::F64Sqrt,
            Instr::F64Add,
            Instr::F64Sub,
            Instr::F64Mul,
            Instr::F64Div,
            Instr::F64Min,
            Instr::F64Max,
            Instr::F64CopySign,
            Instr::I32WrapI64,
            Instr::I32TruncF32S,
            Instr::I32TruncF32U,
            Instr::I32TruncF64S,
            Instr::I32TruncF64U,
            Instr::I64ExtendI32S,
            Instr::I64ExtendI32U,
            Instr::I64TruncF32S,
            Instr::I64TruncF32U,
            Instr::I64TruncF64S,
            Instr::I64TruncF64U,
            Instr::F32ConvertI32S,
            Instr::F32ConvertI32U,
            Instr::F32ConvertI64S,
            Instr::F32ConvertI64U,
            Instr::F32DemoteF64,
            Instr::F64ConvertI32S,
            Instr::F64ConvertI32U,
            Instr::F64ConvertI64S,
            Instr::F64ConvertI64U,
            Instr::F64PromoteF32,
            Instr::I32ReinterpretF32,
            Instr::I64ReinterpretF64,
            Instr::F32ReinterpretI32,
            Instr::F64ReinterpretI64,
        ]
    }

    #[test]
    fn test_bare_opcodes_are_distinct() {
        let instrs = bare_instrs();
        let opcodes: HashSet<u8> = instrs.iter().map(Instr::opcode).collect();
        assert_eq!(opcodes.len(), instrs.len());
        assert_eq!(instrs.len(), 128);
    }

    #[test]
    fn test_opcode_ranges() {
        let memarg = MemArg { align: 0, offset: 0 };
        assert_eq!(Instr::Unreachable.opcode(), 0x00);
        assert_eq!(Instr::CallIndirect(0, 0).opcode(), 0x11);
        assert_eq!(Instr::Select.opcode(), 0x1b);
        assert_eq!(Instr::GlobalSet(0).opcode(), 0x24);
        assert_eq!(Instr::I32Load(memarg).opcode(), 0x28);
        assert_eq!(Instr::MemoryGrow(0).opcode(), 0x40);
        assert_eq!(Instr::I32Const(BigInt::from(0)).opcode(), 0x41);
        assert_eq!(Instr::F64ReinterpretI64.opcode(), 0xbf);
    }

    #[test]
    fn test_numeric_opcodes_fill_their_range() {
        let numeric: Vec<u8> = bare_instrs()
            .iter()
            .map(Instr::opcode)
            .filter(|op| *op >= 0x45)
            .collect();
        assert_eq!(numeric, (0x45..=0xbf).collect::<Vec<u8>>());
    }
}
