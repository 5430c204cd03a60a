use crate::instr::Instr;
use num::BigInt;
use std::fmt::Display;

pub type TypeIdx = u32;
pub type FuncIdx = u32;
pub type TableIdx = u32;
pub type MemIdx = u32;
pub type GlobalIdx = u32;
pub type LocalIdx = u32;
pub type LabelIdx = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    I32,
    I64,
    F32,
    F64,
}

impl ValueType {
    pub const fn byte(self) -> u8 {
        match self {
            Self::I32 => 0x7f,
            Self::I64 => 0x7e,
            Self::F32 => 0x7d,
            Self::F64 => 0x7c,
        }
    }
}

/// Result of a block, loop or if. The binary format allows at most one
/// value type here; longer lists are rejected when encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResultType(pub Vec<ValueType>);

impl ResultType {
    pub fn empty() -> Self {
        Self(Vec::default())
    }

    pub fn single(ty: ValueType) -> Self {
        Self(vec![ty])
    }
}

impl From<ValueType> for ResultType {
    fn from(ty: ValueType) -> Self {
        Self::single(ty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuncType {
    pub params: Vec<ValueType>,
    pub results: Vec<ValueType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub min: u32,
    pub max: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemType {
    pub limits: Limits,
}

/// Tables only hold function references, so the element type is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableType {
    pub limits: Limits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    Const,
    Var,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalType {
    pub mutability: Mutability,
    pub ty: ValueType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntKind {
    U32,
    U64,
    S32,
    S64,
    I32,
    I64,
}

impl Display for IntKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::S32 => "s32",
            Self::S64 => "s64",
            Self::I32 => "i32",
            Self::I64 => "i64",
        };
        f.write_str(name)
    }
}

/// An integer value node. The payload is unbounded; the declared width is
/// checked when the node is encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integer {
    pub kind: IntKind,
    pub value: BigInt,
}

impl Integer {
    pub fn new(kind: IntKind, value: impl Into<BigInt>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr(pub Vec<Instr>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemArg {
    pub align: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub module: String,
    pub name: String,
    pub desc: ImportDesc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDesc {
    Func(TypeIdx),
    Table(TableType),
    Mem(MemType),
    Global(GlobalType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub name: String,
    pub desc: ExportDesc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportDesc {
    Func(FuncIdx),
    Table(TableIdx),
    Mem(MemIdx),
    Global(GlobalIdx),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Global {
    pub ty: GlobalType,
    pub init: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub table: TableIdx,
    pub offset: Expr,
    pub init: Vec<FuncIdx>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Local {
    pub count: u32,
    pub ty: ValueType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Code {
    pub locals: Vec<Local>,
    pub body: Expr,
}

impl Code {
    /// Builds a code entry from one value type per local, merging runs of
    /// the same type into a single local group.
    pub fn from_locals(locals: &[ValueType], body: Expr) -> Self {
        let mut groups: Vec<Local> = Vec::default();
        for ty in locals {
            match groups.last_mut() {
                Some(last) if last.ty == *ty => last.count += 1,
                _ => groups.push(Local { count: 1, ty: *ty }),
            }
        }
        Self {
            locals: groups,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Data {
    pub memory: MemIdx,
    pub offset: Expr,
    pub init: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Custom {
    pub name: String,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SectionId {
    Custom = 0,
    Type = 1,
    Import = 2,
    Function = 3,
    Table = 4,
    Memory = 5,
    Global = 6,
    Export = 7,
    Start = 8,
    Element = 9,
    Code = 10,
    Data = 11,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Custom(Custom),
    Type(Vec<FuncType>),
    Import(Vec<Import>),
    Function(Vec<TypeIdx>),
    Table(Vec<TableType>),
    Memory(Vec<MemType>),
    Global(Vec<Global>),
    Export(Vec<Export>),
    Start(FuncIdx),
    Element(Vec<Element>),
    Code(Vec<Code>),
    Data(Vec<Data>),
}

impl Section {
    pub fn id(&self) -> SectionId {
        match self {
            Self::Custom(..) => SectionId::Custom,
            Self::Type(..) => SectionId::Type,
            Self::Import(..) => SectionId::Import,
            Self::Function(..) => SectionId::Function,
            Self::Table(..) => SectionId::Table,
            Self::Memory(..) => SectionId::Memory,
            Self::Global(..) => SectionId::Global,
            Self::Export(..) => SectionId::Export,
            Self::Start(..) => SectionId::Start,
            Self::Element(..) => SectionId::Element,
            Self::Code(..) => SectionId::Code,
            Self::Data(..) => SectionId::Data,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    pub sections: Vec<Section>,
}
