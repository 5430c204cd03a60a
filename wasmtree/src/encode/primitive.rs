use super::{Encode, WriterExt};
use crate::error::{EncodeError, Result};
use crate::structure::*;
use num::BigInt;
use std::io::Write;
use wasmtree_leb128::WriteLeb128;

const EMPTY_RESULT: u8 = 0x40;
const FUNC_TYPE: u8 = 0x60;
const FUNC_REF: u8 = 0x70;

macro_rules! leb128_encoder {
    ($name:ident) => {
        impl Encode for $name {
            fn encode<W>(&self, writer: &mut W) -> Result<()>
            where
                W: Write + ?Sized,
            {
                self.write_leb128(writer)?;
                Ok(())
            }
        }
    };
}

leb128_encoder!(u32);
leb128_encoder!(u64);
leb128_encoder!(i32);
leb128_encoder!(i64);

pub(crate) fn encode_len<W>(len: usize, writer: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    let len = u32::try_from(len).map_err(|_| EncodeError::LengthOverflow(len))?;
    len.encode(writer)
}

/// Writes a length-prefixed run of raw bytes.
pub(crate) fn encode_bytes<W>(bytes: &[u8], writer: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    encode_len(bytes.len(), writer)?;
    writer.write_all(bytes)?;
    Ok(())
}

fn out_of_range(kind: IntKind, value: &BigInt) -> EncodeError {
    EncodeError::OutOfRange {
        kind,
        value: value.clone(),
    }
}

// Bit-pattern integers accept both the signed and the unsigned range of
// their width and are emitted as signed LEB128 of the two's complement.
pub(crate) fn checked_i32(value: &BigInt) -> Result<i32> {
    i32::try_from(value)
        .ok()
        .or_else(|| u32::try_from(value).ok().map(|v| v as i32))
        .ok_or_else(|| out_of_range(IntKind::I32, value))
}

pub(crate) fn checked_i64(value: &BigInt) -> Result<i64> {
    i64::try_from(value)
        .ok()
        .or_else(|| u64::try_from(value).ok().map(|v| v as i64))
        .ok_or_else(|| out_of_range(IntKind::I64, value))
}

impl Encode for Integer {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        let value = &self.value;
        match self.kind {
            IntKind::U32 => u32::try_from(value)
                .map_err(|_| out_of_range(self.kind, value))?
                .encode(writer),
            IntKind::U64 => u64::try_from(value)
                .map_err(|_| out_of_range(self.kind, value))?
                .encode(writer),
            IntKind::S32 => i32::try_from(value)
                .map_err(|_| out_of_range(self.kind, value))?
                .encode(writer),
            IntKind::S64 => i64::try_from(value)
                .map_err(|_| out_of_range(self.kind, value))?
                .encode(writer),
            IntKind::I32 => checked_i32(value)?.encode(writer),
            IntKind::I64 => checked_i64(value)?.encode(writer),
        }
    }
}

impl Encode for f32 {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        writer.write_all(&self.to_le_bytes())?;
        Ok(())
    }
}

impl Encode for f64 {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        writer.write_all(&self.to_le_bytes())?;
        Ok(())
    }
}

impl<T> Encode for Vec<T>
where
    T: Encode,
{
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        encode_len(self.len(), writer)?;
        for item in self.iter() {
            item.encode(writer)?;
        }
        Ok(())
    }
}

impl Encode for str {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        encode_bytes(self.as_bytes(), writer)
    }
}

impl Encode for String {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        self.as_str().encode(writer)
    }
}

impl<T1, T2> Encode for (T1, T2)
where
    T1: Encode,
    T2: Encode,
{
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        self.0.encode(writer)?;
        self.1.encode(writer)
    }
}

impl Encode for ValueType {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        writer.byte(self.byte())?;
        Ok(())
    }
}

impl Encode for ResultType {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        match self.0.as_slice() {
            [] => writer.byte(EMPTY_RESULT)?,
            [ty] => ty.encode(writer)?,
            types => return Err(EncodeError::MultiValueResult(types.len())),
        }
        Ok(())
    }
}

impl Encode for FuncType {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        writer.byte(FUNC_TYPE)?;
        self.params.encode(writer)?;
        self.results.encode(writer)
    }
}

impl Encode for Limits {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        if let Some(ref max) = self.max {
            writer.byte(0x01)?;
            self.min.encode(writer)?;
            max.encode(writer)
        } else {
            writer.byte(0x00)?;
            self.min.encode(writer)
        }
    }
}

impl Encode for MemType {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        self.limits.encode(writer)
    }
}

impl Encode for TableType {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        writer.byte(FUNC_REF)?;
        self.limits.encode(writer)
    }
}

impl Encode for GlobalType {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        self.ty.encode(writer)?;
        match self.mutability {
            Mutability::Const => writer.byte(0x00)?,
            Mutability::Var => writer.byte(0x01)?,
        }
        Ok(())
    }
}

impl Encode for MemArg {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        self.align.encode(writer)?;
        self.offset.encode(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_encode {
        ($name: ident, $node: expr, $expected: expr) => {
            #[test]
            fn $name() {
                let node = $node;
                let mut buff = Vec::<u8>::default();
                node.encode(&mut buff).unwrap();

                let expectation: &[u8] = $expected;
                assert_eq!(buff.as_slice(), expectation);
            }
        };
    }

    test_encode! {u32_624485, 624485u32, &[0xe5, 0x8e, 0x26]}
    test_encode! {i64_s1, -1i64, &[0x7f]}
    test_encode! {int_u32_max, Integer::new(IntKind::U32, u32::MAX), &[0xff, 0xff, 0xff, 0xff, 0x0f]}
    test_encode! {int_u64_320, Integer::new(IntKind::U64, 320), &[192, 2]}
    test_encode! {int_s32_s320, Integer::new(IntKind::S32, -320), &[192, 125]}
    test_encode! {int_s64_s9019283812387, Integer::new(IntKind::S64, -9019283812387i64), &[221, 159, 171, 198, 192, 249, 125]}
    test_encode! {int_i32_s1, Integer::new(IntKind::I32, -1), &[0x7f]}
    test_encode! {int_i32_unsigned_max, Integer::new(IntKind::I32, u32::MAX), &[0x7f]}
    test_encode! {int_i32_2_pow_31, Integer::new(IntKind::I32, 1u64 << 31), &[0x80, 0x80, 0x80, 0x80, 0x78]}
    test_encode! {int_i64_unsigned_max, Integer::new(IntKind::I64, u64::MAX), &[0x7f]}
    test_encode! {f32_one, 1f32, &[0x00, 0x00, 0x80, 0x3f]}
    test_encode! {f64_one, 1f64, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf0, 0x3f]}
    test_encode! {f32_nan_bits, f32::from_bits(0x7fc0_0001), &[0x01, 0x00, 0xc0, 0x7f]}
    test_encode! {name_test, String::from("test"), &[0x04, 0x74, 0x65, 0x73, 0x74]}
    test_encode! {name_utf8, "é", &[0x02, 0xc3, 0xa9]}
    test_encode! {name_empty, "", &[0x00]}
    test_encode! {vector_of_u32, vec![1u32, 128, 0], &[0x03, 0x01, 0x80, 0x01, 0x00]}
    test_encode! {vector_empty, Vec::<u32>::new(), &[0x00]}
    test_encode! {value_types, vec![ValueType::I32, ValueType::I64, ValueType::F32, ValueType::F64], &[0x04, 0x7f, 0x7e, 0x7d, 0x7c]}
    test_encode! {result_empty, ResultType::empty(), &[0x40]}
    test_encode! {result_i64, ResultType::single(ValueType::I64), &[0x7e]}
    test_encode! {func_type, FuncType { params: vec![ValueType::I32, ValueType::I32], results: vec![ValueType::I32] }, &[0x60, 0x02, 0x7f, 0x7f, 0x01, 0x7f]}
    test_encode! {func_type_empty, FuncType { params: vec![], results: vec![] }, &[0x60, 0x00, 0x00]}
    test_encode! {limits_min, Limits { min: 1, max: None }, &[0x00, 0x01]}
    test_encode! {limits_min_max, Limits { min: 0, max: Some(300) }, &[0x01, 0x00, 0xac, 0x02]}
    test_encode! {mem_type, MemType { limits: Limits { min: 1, max: Some(2) } }, &[0x01, 0x01, 0x02]}
    test_encode! {table_type, TableType { limits: Limits { min: 2, max: None } }, &[0x70, 0x00, 0x02]}
    test_encode! {global_const, GlobalType { mutability: Mutability::Const, ty: ValueType::F32 }, &[0x7d, 0x00]}
    test_encode! {global_var, GlobalType { mutability: Mutability::Var, ty: ValueType::I32 }, &[0x7f, 0x01]}
    test_encode! {mem_arg, MemArg { align: 2, offset: 1024 }, &[0x02, 0x80, 0x08]}
    test_encode! {pair, (3u32, String::from("f")), &[0x03, 0x01, 0x66]}

    #[test]
    fn test_integer_range_violations() {
        let cases = [
            Integer::new(IntKind::U32, -1),
            Integer::new(IntKind::U32, 1u64 << 32),
            Integer::new(IntKind::U64, BigInt::from(1) << 64u32),
            Integer::new(IntKind::S32, 1u64 << 31),
            Integer::new(IntKind::S32, -(1i64 << 31) - 1),
            Integer::new(IntKind::S64, BigInt::from(1) << 63u32),
            Integer::new(IntKind::I32, 1u64 << 32),
            Integer::new(IntKind::I32, -(1i64 << 31) - 1),
            Integer::new(IntKind::I64, BigInt::from(1) << 64u32),
        ];

        for case in cases {
            let mut buff = Vec::<u8>::default();
            match case.encode(&mut buff) {
                Err(EncodeError::OutOfRange { kind, value }) => {
                    assert_eq!(kind, case.kind);
                    assert_eq!(value, case.value);
                }
                other => panic!("expected a range violation for {case:?}, got {other:?}"),
            }
            assert!(buff.is_empty(), "nothing is written for {case:?}");
        }
    }

    #[test]
    fn test_multi_value_result_rejected() {
        let result = ResultType(vec![ValueType::I32, ValueType::I64]).to_bytes();
        assert!(matches!(result, Err(EncodeError::MultiValueResult(2))));
    }

    #[test]
    fn test_range_error_message() {
        let err = Integer::new(IntKind::U32, -5).to_bytes().unwrap_err();
        assert_eq!(err.to_string(), "value -5 is out of range for u32");
    }
}
