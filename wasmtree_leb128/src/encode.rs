use num::{BigInt, BigUint, Integer, ToPrimitive, Zero};
use std::io::Write;

const CONTINUATION: u8 = 0b1000_0000;
const PAYLOAD: u8 = 0b0111_1111;
const SIGN: u8 = 0b0100_0000;

pub trait WriteLeb128 {
    fn write_leb128<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write + ?Sized;
}

macro_rules! leb128_unsigned {
    ($name:ident) => {
        impl WriteLeb128 for $name {
            fn write_leb128<W>(&self, writer: &mut W) -> std::io::Result<()>
            where
                W: Write + ?Sized,
            {
                let mut val = *self;
                loop {
                    let b = (val as u8) & PAYLOAD;
                    val >>= 7;

                    if val > 0 {
                        writer.write_all(&[b | CONTINUATION])?;
                    } else {
                        writer.write_all(&[b])?;
                        break;
                    }
                }

                Ok(())
            }
        }
    };
}

leb128_unsigned!(u8);
leb128_unsigned!(u16);
leb128_unsigned!(u32);
leb128_unsigned!(u64);
leb128_unsigned!(usize);

macro_rules! leb128_signed {
    ($name:ident) => {
        impl WriteLeb128 for $name {
            fn write_leb128<W>(&self, writer: &mut W) -> std::io::Result<()>
            where
                W: Write + ?Sized,
            {
                let mut val = *self;
                loop {
                    let mut b = val as u8;
                    val >>= 6;

                    let done = val == 0 || val == -1;
                    if done {
                        b &= PAYLOAD;
                    } else {
                        val >>= 1;
                        b |= CONTINUATION;
                    }

                    writer.write_all(&[b])?;
                    if done {
                        break;
                    }
                }

                Ok(())
            }
        }
    };
}

leb128_signed!(i8);
leb128_signed!(i16);
leb128_signed!(i32);
leb128_signed!(i64);
leb128_signed!(isize);

impl WriteLeb128 for BigUint {
    fn write_leb128<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write + ?Sized,
    {
        writer.write_all(&encode_unsigned(self))
    }
}

impl WriteLeb128 for BigInt {
    fn write_leb128<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write + ?Sized,
    {
        writer.write_all(&encode_signed(self))
    }
}

pub fn encode_unsigned(value: &BigUint) -> Vec<u8> {
    let group = BigUint::from(CONTINUATION);
    let mut buff = Vec::<u8>::default();
    let mut val = value.clone();
    loop {
        let (rest, low) = val.div_rem(&group);
        let b = low.to_u8().unwrap_or_default();
        val = rest;

        if val.is_zero() {
            buff.push(b);
            break;
        }
        buff.push(b | CONTINUATION);
    }
    buff
}

pub fn encode_signed(value: &BigInt) -> Vec<u8> {
    let group = BigInt::from(CONTINUATION);
    let minus_one = BigInt::from(-1);
    let mut buff = Vec::<u8>::default();
    let mut val = value.clone();
    loop {
        // floor division keeps `low` in 0..128 for negative values too
        let (rest, low) = val.div_mod_floor(&group);
        let b = low.to_u8().unwrap_or_default();
        val = rest;

        let done = if b & SIGN == 0 {
            val.is_zero()
        } else {
            val == minus_one
        };

        if done {
            buff.push(b);
            break;
        }
        buff.push(b | CONTINUATION);
    }
    buff
}
