use crate::encode::{encode_len, Encode, WriterExt};
use crate::error::Result;
use crate::structure::{Custom, FuncIdx, LocalIdx, Section};

const MODULE_NAME: u8 = 0x00;
const FUNCTION_NAMES: u8 = 0x01;
const LOCAL_NAMES: u8 = 0x02;

/// Builder for the `name` custom section. Name maps are written in
/// ascending index order whatever order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSection {
    pub module: Option<String>,
    pub functions: Vec<(FuncIdx, String)>,
    pub locals: Vec<(FuncIdx, Vec<(LocalIdx, String)>)>,
}

impl NameSection {
    pub fn to_section(&self) -> Result<Section> {
        let mut payload = Vec::<u8>::default();

        if let Some(module) = &self.module {
            subsection(&mut payload, MODULE_NAME, module)?;
        }

        if !self.functions.is_empty() {
            let mut functions = self.functions.clone();
            functions.sort_by_key(|(idx, _)| *idx);
            subsection(&mut payload, FUNCTION_NAMES, &functions)?;
        }

        if !self.locals.is_empty() {
            let mut locals = self.locals.clone();
            locals.sort_by_key(|(idx, _)| *idx);
            for (_, names) in locals.iter_mut() {
                names.sort_by_key(|(idx, _)| *idx);
            }
            subsection(&mut payload, LOCAL_NAMES, &locals)?;
        }

        Ok(Section::Custom(Custom {
            name: String::from("name"),
            payload,
        }))
    }
}

fn subsection<T>(payload: &mut Vec<u8>, id: u8, content: &T) -> Result<()>
where
    T: Encode + ?Sized,
{
    let buff = content.to_bytes()?;
    payload.byte(id)?;
    encode_len(buff.len(), payload)?;
    payload.extend_from_slice(&buff);
    Ok(())
}
