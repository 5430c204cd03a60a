use super::primitive::{checked_i32, checked_i64};
use super::{Encode, WriterExt};
use crate::error::Result;
use crate::instr::{Instr, ELSE, END};
use std::io::Write;

impl Encode for Instr {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        // constants are range-checked before their opcode is written
        match self {
            Self::I32Const(value) => {
                checked_i32(value)?;
            }
            Self::I64Const(value) => {
                checked_i64(value)?;
            }
            _ => {}
        }
        writer.byte(self.opcode())?;
        self.encode_immediates(writer)
    }
}

impl Instr {
    fn encode_immediates<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        match self {
            Self::Block(ty, body) | Self::Loop(ty, body) | Self::If(ty, body) => {
                ty.encode(writer)?;
                encode_seq(body, writer)?;
                writer.byte(END)?;
            }
            Self::IfElse(ty, then_body, else_body) => {
                ty.encode(writer)?;
                encode_seq(then_body, writer)?;
                writer.byte(ELSE)?;
                encode_seq(else_body, writer)?;
                writer.byte(END)?;
            }
            Self::Br(label) | Self::BrIf(label) => label.encode(writer)?,
            Self::BrTable(labels, default) => {
                labels.encode(writer)?;
                default.encode(writer)?;
            }
            Self::Call(func) => func.encode(writer)?,
            Self::CallIndirect(ty, table) => {
                ty.encode(writer)?;
                table.encode(writer)?;
            }
            Self::LocalGet(idx)
            | Self::LocalSet(idx)
            | Self::LocalTee(idx)
            | Self::GlobalGet(idx)
            | Self::GlobalSet(idx) => idx.encode(writer)?,
            Self::I32Load(memarg)
            | Self::I64Load(memarg)
            | Self::F32Load(memarg)
            | Self::F64Load(memarg)
            | Self::I32Load8S(memarg)
            | Self::I32Load8U(memarg)
            | Self::I32Load16S(memarg)
            | Self::I32Load16U(memarg)
            | Self::I64Load8S(memarg)
            | Self::I64Load8U(memarg)
            | Self::I64Load16S(memarg)
            | Self::I64Load16U(memarg)
            | Self::I64Load32S(memarg)
            | Self::I64Load32U(memarg)
            | Self::I32Store(memarg)
            | Self::I64Store(memarg)
            | Self::F32Store(memarg)
            | Self::F64Store(memarg)
            | Self::I32Store8(memarg)
            | Self::I32Store16(memarg)
            | Self::I64Store8(memarg)
            | Self::I64Store16(memarg)
            | Self::I64Store32(memarg) => memarg.encode(writer)?,
            Self::MemorySize(mem) | Self::MemoryGrow(mem) => mem.encode(writer)?,
            Self::F32Const(value) => value.encode(writer)?,
            Self::F64Const(value) => value.encode(writer)?,
            Self::I32Const(value) => checked_i32(value)?.encode(writer)?,
            Self::I64Const(value) => checked_i64(value)?.encode(writer)?,
            Self::Unreachable
            | Self::Nop
            | Self::Return
            | Self::Drop
            | Self::Select
            | Self::I32Eqz
            | Self::I32Eq
            | Self::I32Ne
            | Self::I32LtS
            | Self::I32LtU
            | Self::I32GtS
            | Self::I32GtU
            | Self::I32LeS
            | Self::I32LeU
            | Self::I32GeS
            | Self::I32GeU
            | Self::I64Eqz
            | Self::I64Eq
            | Self::I64Ne
            | Self::I64LtS
            | Self::I64LtU
            | Self::I64GtS
            | Self::I64GtU
            | Self::I64LeS
            | Self::I64LeU
            | Self::I64GeS
            | Self::I64GeU
            | Self::F32Eq
            | Self::F32Ne
            | Self::F32Lt
            | Self::F32Gt
            | Self::F32Le
            | Self::F32Ge
            | Self::F64Eq
            | Self::F64Ne
            | Self::F64Lt
            | Self::F64Gt
            | Self::F64Le
            | Self::F64Ge
            | Self::I32Clz
            | Self::I32Ctz
            | Self::I32Popcnt
            | Self::I32Add
            | Self::I32Sub
            | Self::I32Mul
            | Self::I32DivS
            | Self::I32DivU
            | Self::I32RemS
            | Self::I32RemU
            | Self::I32And
            | Self::I32Or
            | Self::I32Xor
            | Self::I32Shl
            | Self::I32ShrS
            | Self::I32ShrU
            | Self::I32Rotl
            | Self::I32Rotr
            | Self::I64Clz
            | Self::I64Ctz
            | Self::I64Popcnt
            | Self::I64Add
            | Self::I64Sub
            | Self::I64Mul
            | Self::I64DivS
            | Self::I64DivU
            | Self::I64RemS
            | Self::I64RemU
            | Self::I64And
            | Self::I64Or
            | Self::I64Xor
            | Self::I64Shl
            | Self::I64ShrS
            | Self::I64ShrU
            | Self::I64Rotl
            | Self::I64Rotr
            | Self::F32Abs
            | Self::F32Neg
            | Self::F32Ceil
            | Self::F32Floor
            | Self::F32Trunc
            | Self::F32Nearest
            | Self::F32Sqrt
            | Self::F32Add
            | Self::F32Sub
            | Self::F32Mul
            | Self::F32Div
            | Self::F32Min
            | Self::F32Max
            | Self::F32CopySign
            | Self::F64Abs
            | Self::F64Neg
            | Self::F64Ceil
            | Self::F64Floor
            | Self::F64Trunc
            | Self::F64Nearest
            | Self::F64Sqrt
            | Self::F64Add
            | Self::F64Sub
            | Self::F64Mul
            | Self::F64Div
            | Self::F64Min
            | Self::F64Max
            | Self::F64CopySign
            | Self::I32WrapI64
            | Self::I32TruncF32S
            | Self::I32TruncF32U
            | Self::I32TruncF64S
            | Self::I32TruncF64U
            | Self::I64ExtendI32S
            | Self::I64ExtendI32U
            | Self::I64TruncF32S
            | Self::I64TruncF32U
            | Self::I64TruncF64S
            | Self::I64TruncF64U
            | Self::F32ConvertI32S
            | Self::F32ConvertI32U
            | Self::F32ConvertI64S
            | Self::F32ConvertI64U
            | Self::F32DemoteF64
            | Self::F64ConvertI32S
            | Self::F64ConvertI32U
            | Self::F64ConvertI64S
            | Self::F64ConvertI64U
            | Self::F64PromoteF32
            | Self::I32ReinterpretF32
            | Self::I64ReinterpretF64
            | Self::F32ReinterpretI32
            | Self::F64ReinterpretI64 => {}
        }
        Ok(())
    }
}

pub(crate) fn encode_seq<W>(instrs: &[Instr], writer: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    for instr in instrs.iter() {
        instr.encode(writer)?;
    }
    Ok(())
}
