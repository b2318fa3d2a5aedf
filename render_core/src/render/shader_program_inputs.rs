use std::{fmt, sync::Arc};

use super::context::AbstractContext;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShaderProgramInputsError {
    #[error(
        "shader input sequences are not aligned, names = {names}, types = {types}, locations = {locations}"
    )]
    MismatchedLengths {
        names: usize,
        types: usize,
        locations: usize,
    },
    #[error("no display name for shader input type {0:?}")]
    UnrecognizedType(ShaderInputType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShaderInputType {
    Unknown,
    Int1,
    Int2,
    Int3,
    Int4,
    Float1,
    Float2,
    Float3,
    Float4,
    Float9,
    Float16,
    Sampler2d,
    Attribute,
}

impl ShaderInputType {
    /// Display name for debugging. Samplers and attributes have none.
    pub fn type_to_string(self) -> Result<&'static str, ShaderProgramInputsError> {
        match self {
            ShaderInputType::Unknown => Ok("unknown"),
            ShaderInputType::Int1 => Ok("int1"),
            ShaderInputType::Int2 => Ok("int2"),
            ShaderInputType::Int3 => Ok("int3"),
            ShaderInputType::Int4 => Ok("int4"),
            ShaderInputType::Float1 => Ok("float1"),
            ShaderInputType::Float2 => Ok("float2"),
            ShaderInputType::Float3 => Ok("float3"),
            ShaderInputType::Float4 => Ok("float4"),
            ShaderInputType::Float9 => Ok("float9"),
            ShaderInputType::Float16 => Ok("float16"),
            ShaderInputType::Sampler2d | ShaderInputType::Attribute => {
                Err(ShaderProgramInputsError::UnrecognizedType(self))
            }
        }
    }

    pub fn component_count(self) -> Option<usize> {
        match self {
            ShaderInputType::Int1 | ShaderInputType::Float1 => Some(1),
            ShaderInputType::Int2 | ShaderInputType::Float2 => Some(2),
            ShaderInputType::Int3 | ShaderInputType::Float3 => Some(3),
            ShaderInputType::Int4 | ShaderInputType::Float4 => Some(4),
            ShaderInputType::Float9 => Some(9),
            ShaderInputType::Float16 => Some(16),
            ShaderInputType::Unknown | ShaderInputType::Sampler2d | ShaderInputType::Attribute => {
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderInput<'a> {
    pub name: &'a str,
    pub input_type: ShaderInputType,
    pub location: u32,
}

/// Uniforms and attributes of one linked shader program.
///
/// `names[i]`, `types[i]` and `locations[i]` describe the same input.
pub struct ShaderProgramInputs {
    context: Arc<dyn AbstractContext>,
    program: u32,
    names: Vec<String>,
    types: Vec<ShaderInputType>,
    locations: Vec<u32>,
}

impl ShaderProgramInputs {
    pub fn new(
        context: Arc<dyn AbstractContext>,
        program: u32,
        names: Vec<String>,
        types: Vec<ShaderInputType>,
        locations: Vec<u32>,
    ) -> Result<Self, ShaderProgramInputsError> {
        if names.len() != types.len() || names.len() != locations.len() {
            return Err(ShaderProgramInputsError::MismatchedLengths {
                names: names.len(),
                types: types.len(),
                locations: locations.len(),
            });
        }

        log::debug!(
            "Shader program {program} has {} inputs: {names:?}",
            names.len()
        );

        Ok(Self {
            context,
            program,
            names,
            types,
            locations,
        })
    }

    pub fn context(&self) -> &Arc<dyn AbstractContext> {
        &self.context
    }

    pub fn program(&self) -> u32 {
        self.program
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn types(&self) -> &[ShaderInputType] {
        &self.types
    }

    pub fn locations(&self) -> &[u32] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ShaderInput<'_>> {
        self.names
            .iter()
            .zip(self.types.iter())
            .zip(self.locations.iter())
            .map(|((name, input_type), location)| ShaderInput {
                name,
                input_type: *input_type,
                location: *location,
            })
    }

    pub fn get(&self, name: &str) -> Option<ShaderInput<'_>> {
        self.iter().find(|input| input.name == name)
    }

    pub fn location_of(&self, name: &str) -> Option<u32> {
        self.get(name).map(|input| input.location)
    }
}

impl fmt::Debug for ShaderProgramInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderProgramInputs")
            .field("program", &self.program)
            .field("names", &self.names)
            .field("types", &self.types)
            .field("locations", &self.locations)
            .finish_non_exhaustive()
    }
}
