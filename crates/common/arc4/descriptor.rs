use std::fmt;
use std::str::FromStr;

use avm_common::constants::{ADDRESS_PUBLIC_KEY_LENGTH, BITS_IN_BYTE};

use crate::{
    constants::{MAX_UFIXED_PRECISION, MAX_UINT_BITS, OFFSET_SIZE},
    error::Arc4Error,
};

/// Static description of an ARC4 type.
///
/// Whether a type is static (fixed encoded length) or dynamic follows from
/// the descriptor alone: it is dynamic iff it contains a `string`, a `byte[]`
/// or a variable length array anywhere inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Bool,
    UintN { bits: u16 },
    UFixed { bits: u16, precision: u8 },
    Byte,
    Address,
    Str,
    DynamicBytes,
    StaticBytes { len: usize },
    FixedArray { elem: Box<TypeDescriptor>, len: usize },
    DynArray { elem: Box<TypeDescriptor> },
    Tuple { fields: Vec<TypeDescriptor> },
    Struct { name: String, fields: Vec<(String, TypeDescriptor)> },
}

impl TypeDescriptor {
    pub fn uint(bits: u16) -> Result<Self, Arc4Error> {
        check_uint_width(bits)?;
        Ok(Self::UintN { bits })
    }

    pub fn ufixed(bits: u16, precision: u8) -> Result<Self, Arc4Error> {
        check_uint_width(bits)?;
        check_precision(precision)?;
        Ok(Self::UFixed { bits, precision })
    }

    pub fn fixed_array(elem: TypeDescriptor, len: usize) -> Self {
        Self::FixedArray {
            elem: Box::new(elem),
            len,
        }
    }

    pub fn dyn_array(elem: TypeDescriptor) -> Self {
        Self::DynArray {
            elem: Box::new(elem),
        }
    }

    pub fn tuple(fields: Vec<TypeDescriptor>) -> Self {
        Self::Tuple { fields }
    }

    pub fn structure(
        name: impl Into<String>,
        fields: Vec<(impl Into<String>, TypeDescriptor)>,
    ) -> Self {
        Self::Struct {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(field, ty)| (field.into(), ty))
                .collect(),
        }
    }

    /// Recursively checks integer widths, precisions and that every head
    /// length fits in a `usize`.
    pub fn validate(&self) -> Result<(), Arc4Error> {
        match self {
            Self::UintN { bits } => check_uint_width(*bits),
            Self::UFixed { bits, precision } => {
                check_uint_width(*bits)?;
                check_precision(*precision)
            }
            Self::FixedArray { elem, len } => {
                elem.validate()?;
                array_head_length(self, elem, *len).map(|_| ())
            }
            Self::DynArray { elem } => elem.validate(),
            Self::Tuple { fields } => {
                fields.iter().try_for_each(Self::validate)?;
                self.head_length().map(|_| ())
            }
            Self::Struct { fields, .. } => {
                fields.iter().try_for_each(|(_, ty)| ty.validate())?;
                self.head_length().map(|_| ())
            }
            Self::Bool
            | Self::Byte
            | Self::Address
            | Self::Str
            | Self::DynamicBytes
            | Self::StaticBytes { .. } => Ok(()),
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_dynamic(&self) -> bool {
        match self {
            Self::Str | Self::DynamicBytes | Self::DynArray { .. } => true,
            Self::FixedArray { elem, .. } => elem.is_dynamic(),
            Self::Tuple { fields } => fields.iter().any(Self::is_dynamic),
            Self::Struct { fields, .. } => fields.iter().any(|(_, ty)| ty.is_dynamic()),
            Self::Bool
            | Self::UintN { .. }
            | Self::UFixed { .. }
            | Self::Byte
            | Self::Address
            | Self::StaticBytes { .. } => false,
        }
    }

    /// Encoded length of a static type, computed without any instance.
    pub fn static_length(&self) -> Result<usize, Arc4Error> {
        if self.is_dynamic() {
            return Err(Arc4Error::DynamicType(self.to_string()));
        }
        self.head_length()
    }

    /// Size this type occupies when inlined in a head: its full length for
    /// static types, otherwise the size of the offset pointer.
    ///
    /// Fails when the length of a static type does not fit in a `usize`.
    pub fn head_length(&self) -> Result<usize, Arc4Error> {
        if self.is_dynamic() {
            return Ok(OFFSET_SIZE);
        }
        match self {
            Self::Bool | Self::Byte => Ok(1),
            Self::UintN { bits } | Self::UFixed { bits, .. } => {
                Ok(usize::from(*bits) / BITS_IN_BYTE)
            }
            Self::Address => Ok(ADDRESS_PUBLIC_KEY_LENGTH),
            Self::StaticBytes { len } => Ok(*len),
            Self::FixedArray { elem, len } => array_head_length(self, elem, *len),
            Self::Tuple { fields } => sequence_head_length(self, fields.iter()),
            Self::Struct { fields, .. } => {
                sequence_head_length(self, fields.iter().map(|(_, ty)| ty))
            }
            Self::Str | Self::DynamicBytes | Self::DynArray { .. } => Ok(OFFSET_SIZE),
        }
    }

    /// Type of the element at `index` for arrays, tuples and structs.
    pub fn child(&self, index: usize) -> Option<&TypeDescriptor> {
        match self {
            Self::FixedArray { elem, len } if index < *len => Some(elem),
            Self::DynArray { elem } => Some(elem),
            Self::Tuple { fields } => fields.get(index),
            Self::Struct { fields, .. } => fields.get(index).map(|(_, ty)| ty),
            _ => None,
        }
    }

    pub fn field_index(&self, name: &str) -> Result<usize, Arc4Error> {
        match self {
            Self::Struct { fields, .. } => fields
                .iter()
                .position(|(field, _)| field == name)
                .ok_or_else(|| Arc4Error::UnknownField(name.to_string())),
            other => Err(Arc4Error::type_mismatch("struct", other)),
        }
    }
}

/// Head length of `len` elements of `elem`, packing bools 8 per byte.
fn array_head_length(
    owner: &TypeDescriptor,
    elem: &TypeDescriptor,
    len: usize,
) -> Result<usize, Arc4Error> {
    if elem.is_bool() {
        return Ok(len.div_ceil(BITS_IN_BYTE));
    }
    elem.head_length()?
        .checked_mul(len)
        .ok_or_else(|| too_large(owner))
}

/// Head length of a field sequence, packing runs of consecutive bools.
pub(crate) fn sequence_head_length<'a>(
    owner: &TypeDescriptor,
    types: impl Iterator<Item = &'a TypeDescriptor>,
) -> Result<usize, Arc4Error> {
    let mut length = 0usize;
    let mut bool_run = 0usize;
    let add = |length: usize, extra: usize| {
        length.checked_add(extra).ok_or_else(|| too_large(owner))
    };
    for ty in types {
        if ty.is_bool() {
            bool_run += 1;
            continue;
        }
        length = add(length, bool_run.div_ceil(BITS_IN_BYTE))?;
        bool_run = 0;
        length = add(length, ty.head_length()?)?;
    }
    add(length, bool_run.div_ceil(BITS_IN_BYTE))
}

fn too_large(ty: &TypeDescriptor) -> Arc4Error {
    Arc4Error::InvalidDescriptor(format!("encoded length of {ty} does not fit in memory"))
}

fn check_uint_width(bits: u16) -> Result<(), Arc4Error> {
    if bits == 0 || bits > MAX_UINT_BITS || usize::from(bits) % BITS_IN_BYTE != 0 {
        return Err(Arc4Error::InvalidDescriptor(format!(
            "bit width must be a multiple of 8 between 8 and {MAX_UINT_BITS}, got {bits}"
        )));
    }
    Ok(())
}

fn check_precision(precision: u8) -> Result<(), Arc4Error> {
    if precision == 0 || precision > MAX_UFIXED_PRECISION {
        return Err(Arc4Error::InvalidDescriptor(format!(
            "precision must be between 1 and {MAX_UFIXED_PRECISION}, got {precision}"
        )));
    }
    Ok(())
}

/// Renders the canonical ARC4 type string. Structs render as their tuple.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::UintN { bits } => write!(f, "uint{bits}"),
            Self::UFixed { bits, precision } => write!(f, "ufixed{bits}x{precision}"),
            Self::Byte => write!(f, "byte"),
            Self::Address => write!(f, "address"),
            Self::Str => write!(f, "string"),
            Self::DynamicBytes => write!(f, "byte[]"),
            Self::StaticBytes { len } => write!(f, "byte[{len}]"),
            Self::FixedArray { elem, len } => write!(f, "{elem}[{len}]"),
            Self::DynArray { elem } => write!(f, "{elem}[]"),
            Self::Tuple { fields } => write_tuple(f, fields.iter()),
            Self::Struct { fields, .. } => write_tuple(f, fields.iter().map(|(_, ty)| ty)),
        }
    }
}

fn write_tuple<'a>(
    f: &mut fmt::Formatter<'_>,
    fields: impl Iterator<Item = &'a TypeDescriptor>,
) -> fmt::Result {
    write!(f, "(")?;
    for (i, field) in fields.enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{field}")?;
    }
    write!(f, ")")
}

/// Parses ARC4 type strings such as `(uint64,bool[10],string)[]`.
///
/// `byte[]` and `byte[N]` parse to [`TypeDescriptor::DynamicBytes`] and
/// [`TypeDescriptor::StaticBytes`], which encode identically to the arrays of
/// `byte` they stand for.
impl FromStr for TypeDescriptor {
    type Err = Arc4Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(stripped) = s.strip_suffix(']') {
            let open = stripped
                .rfind('[')
                .ok_or_else(|| invalid_type_string(s))?;
            let (elem, len) = (&stripped[..open], &stripped[open + 1..]);
            let elem: TypeDescriptor = elem.parse()?;
            return match (elem, len) {
                (Self::Byte, "") => Ok(Self::DynamicBytes),
                (elem, "") => Ok(Self::dyn_array(elem)),
                (elem, len) => {
                    let len = len.parse::<usize>().map_err(|_| invalid_type_string(s))?;
                    match elem {
                        Self::Byte => Ok(Self::StaticBytes { len }),
                        elem => Ok(Self::fixed_array(elem, len)),
                    }
                }
            };
        }
        if let Some(inner) = s.strip_prefix('(') {
            let inner = inner.strip_suffix(')').ok_or_else(|| invalid_type_string(s))?;
            let fields = split_top_level(inner)
                .into_iter()
                .map(str::parse)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Self::tuple(fields));
        }
        match s {
            "bool" => Ok(Self::Bool),
            "byte" => Ok(Self::Byte),
            "address" => Ok(Self::Address),
            "string" => Ok(Self::Str),
            _ => {
                if let Some(bits) = s.strip_prefix("uint") {
                    let bits = bits.parse::<u16>().map_err(|_| invalid_type_string(s))?;
                    return Self::uint(bits);
                }
                if let Some(rest) = s.strip_prefix("ufixed") {
                    let (bits, precision) =
                        rest.split_once('x').ok_or_else(|| invalid_type_string(s))?;
                    let bits = bits.parse::<u16>().map_err(|_| invalid_type_string(s))?;
                    let precision = precision
                        .parse::<u8>()
                        .map_err(|_| invalid_type_string(s))?;
                    return Self::ufixed(bits, precision);
                }
                Err(invalid_type_string(s))
            }
        }
    }
}

fn invalid_type_string(s: &str) -> Arc4Error {
    Arc4Error::InvalidDescriptor(format!("cannot parse type string {s:?}"))
}

/// Splits on commas that are not nested inside parentheses.
fn split_top_level(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}
