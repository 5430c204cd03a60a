mod instr;
mod module;
mod primitive;

use crate::config::EncoderConfig;
use crate::error::Result;
use crate::structure::{Module, Section, SectionId};
use rayon::prelude::*;
use std::io::Write;

pub(crate) use primitive::encode_len;

pub trait Encode {
    fn encode<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + ?Sized;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buff = Vec::<u8>::default();
        self.encode(&mut buff)?;
        Ok(buff)
    }
}

pub(crate) trait WriterExt: Write {
    fn byte(&mut self, value: u8) -> std::io::Result<()> {
        self.write_all(&[value])
    }
}

impl<T: Write + ?Sized> WriterExt for T {}

pub static MAGIC_NUMBER: &[u8] = &[0x00, 0x61, 0x73, 0x6d];
pub static VERSION: &[u8] = &[0x01, 0x00, 0x00, 0x00];

#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Encodes a whole module. Either the complete image is returned or
    /// nothing is.
    pub fn encode(&self, module: &Module) -> Result<Vec<u8>> {
        tracing::debug!(
            sections = module.sections.len(),
            parallel = self.config.parallel_sections,
            "encoding module"
        );

        if self.config.check_section_order {
            check_section_order(&module.sections);
        }

        let result = if self.config.parallel_sections {
            encode_parallel(module)
        } else {
            module.to_bytes()
        };

        match &result {
            Ok(bytes) => tracing::debug!(len = bytes.len(), "module encoded"),
            Err(err) => tracing::debug!(%err, "cannot encode module"),
        }
        result
    }
}

pub fn encode(module: &Module) -> Result<Vec<u8>> {
    Encoder::default().encode(module)
}

fn encode_parallel(module: &Module) -> Result<Vec<u8>> {
    let sections = module
        .sections
        .par_iter()
        .map(|section| section.to_bytes())
        .collect::<Result<Vec<_>>>()?;

    let len = sections.iter().map(Vec::len).sum::<usize>();
    let mut buff = Vec::with_capacity(MAGIC_NUMBER.len() + VERSION.len() + len);
    buff.extend_from_slice(MAGIC_NUMBER);
    buff.extend_from_slice(VERSION);
    for section in sections {
        buff.extend_from_slice(&section);
    }
    Ok(buff)
}

fn check_section_order(sections: &[Section]) {
    let mut last: Option<SectionId> = None;
    for section in sections {
        let id = section.id();
        if id == SectionId::Custom {
            continue;
        }
        if let Some(previous) = last {
            if id <= previous {
                tracing::warn!(
                    section = ?id,
                    previous = ?previous,
                    "section is out of canonical order, emitting it as given"
                );
            }
        }
        last = Some(id);
    }
}
