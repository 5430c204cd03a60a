use super::instr::encode_seq;
use super::primitive::{encode_bytes, encode_len};
use super::{Encode, WriterExt, MAGIC_NUMBER, VERSION};
use crate::error::Result;
use crate::instr::END;
use crate::structure::*;
use std::io::Write;

impl Encode for Module {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        writer.write_all(MAGIC_NUMBER)?;
        writer.write_all(VERSION)?;
        for section in self.sections.iter() {
            section.encode(writer)?;
        }
        Ok(())
    }
}

impl Encode for Section {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        let mut buff = Vec::<u8>::default();
        match self {
            Self::Custom(custom) => {
                custom.name.encode(&mut buff)?;
                buff.extend_from_slice(&custom.payload);
            }
            Self::Type(types) => types.encode(&mut buff)?,
            Self::Import(imports) => imports.encode(&mut buff)?,
            Self::Function(funcs) => funcs.encode(&mut buff)?,
            Self::Table(tables) => tables.encode(&mut buff)?,
            Self::Memory(mems) => mems.encode(&mut buff)?,
            Self::Global(globals) => globals.encode(&mut buff)?,
            Self::Export(exports) => exports.encode(&mut buff)?,
            Self::Start(func) => func.encode(&mut buff)?,
            Self::Element(elems) => elems.encode(&mut buff)?,
            Self::Code(codes) => codes.encode(&mut buff)?,
            Self::Data(datas) => datas.encode(&mut buff)?,
        }

        let id = self.id() as u8;
        tracing::trace!(id, len = buff.len(), "section encoded");

        writer.byte(id)?;
        encode_len(buff.len(), writer)?;
        writer.write_all(&buff)?;
        Ok(())
    }
}

impl Encode for Import {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        self.module.encode(writer)?;
        self.name.encode(writer)?;
        self.desc.encode(writer)
    }
}

impl Encode for ImportDesc {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        match self {
            Self::Func(idx) => {
                writer.byte(0x00)?;
                idx.encode(writer)
            }
            Self::Table(table_type) => {
                writer.byte(0x01)?;
                table_type.encode(writer)
            }
            Self::Mem(mem_type) => {
                writer.byte(0x02)?;
                mem_type.encode(writer)
            }
            Self::Global(global_type) => {
                writer.byte(0x03)?;
                global_type.encode(writer)
            }
        }
    }
}

impl Encode for Export {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        self.name.encode(writer)?;
        self.desc.encode(writer)
    }
}

impl Encode for ExportDesc {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        let (kind, idx) = match self {
            Self::Func(idx) => (0x00, idx),
            Self::Table(idx) => (0x01, idx),
            Self::Mem(idx) => (0x02, idx),
            Self::Global(idx) => (0x03, idx),
        };
        writer.byte(kind)?;
        idx.encode(writer)
    }
}

impl Encode for Global {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        self.ty.encode(writer)?;
        self.init.encode(writer)
    }
}

impl Encode for Element {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        self.table.encode(writer)?;
        self.offset.encode(writer)?;
        self.init.encode(writer)
    }
}

impl Encode for Local {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        self.count.encode(writer)?;
        self.ty.encode(writer)
    }
}

impl Encode for Code {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        let mut buff = Vec::<u8>::default();
        self.locals.encode(&mut buff)?;
        self.body.encode(&mut buff)?;

        encode_len(buff.len(), writer)?;
        writer.write_all(&buff)?;
        Ok(())
    }
}

impl Encode for Data {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        self.memory.encode(writer)?;
        self.offset.encode(writer)?;
        encode_bytes(&self.init, writer)
    }
}

impl Encode for Expr {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        encode_seq(&self.0, writer)?;
        writer.byte(END)?;
        Ok(())
    }
}
