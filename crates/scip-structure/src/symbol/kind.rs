use std::fmt::{Display, Formatter};

use protobuf::EnumOrUnknown;
use scip::types::symbol_information::Kind;
use serde::{Serialize, Serializer};

/// Display category of a code element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeType {
    AbstractMethod,
    Array,
    Class,
    Constant,
    Enum,
    Error,
    Function,
    Instance,
    Interface,
    Library,
    Macro,
    Method,
    MethodAlias,
    Module,
    Object,
    Package,
    Signature,
    StaticVariable,
    Struct,
    Trait,
    TraitMethod,
    Type,
    TypeAlias,
    TypeClass,
    TypeClassMethod,
    Union,
    /// Any kind outside the set above. Elements of this type are dropped.
    Unknown,
}

impl CodeType {
    pub fn label(self) -> &'static str {
        match self {
            Self::AbstractMethod => "Abstract Method",
            Self::Array => "Array",
            Self::Class => "Class",
            Self::Constant => "Constant",
            Self::Enum => "Enum",
            Self::Error => "Error",
            Self::Function => "Function",
            Self::Instance => "Instance",
            Self::Interface => "Interface",
            Self::Library => "Library",
            Self::Macro => "Macro",
            Self::Method => "Method",
            Self::MethodAlias => "Method Alias",
            Self::Module => "Module",
            Self::Object => "Object",
            Self::Package => "Package",
            Self::Signature => "Signature",
            Self::StaticVariable => "Static Variable",
            Self::Struct => "Struct",
            Self::Trait => "Trait",
            Self::TraitMethod => "Trait Method",
            Self::Type => "Type",
            Self::TypeAlias => "Type Alias",
            Self::TypeClass => "Type Class",
            Self::TypeClassMethod => "Type Class Method",
            Self::Union => "Union",
            Self::Unknown => "Unknown",
        }
    }

    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

impl Display for CodeType {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CodeType {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Map a SCIP symbol kind to its display category.
pub fn classify(kind: EnumOrUnknown<Kind>) -> CodeType {
    let Ok(kind) = kind.enum_value() else {
        return CodeType::Unknown;
    };
    match kind {
        Kind::AbstractMethod => CodeType::AbstractMethod,
        Kind::Array => CodeType::Array,
        Kind::Class => CodeType::Class,
        Kind::Constant => CodeType::Constant,
        Kind::Enum => CodeType::Enum,
        Kind::Error => CodeType::Error,
        Kind::Function => CodeType::Function,
        Kind::Instance => CodeType::Instance,
        Kind::Interface => CodeType::Interface,
        Kind::Library => CodeType::Library,
        Kind::Macro => CodeType::Macro,
        Kind::Method => CodeType::Method,
        Kind::MethodAlias => CodeType::MethodAlias,
        Kind::Module => CodeType::Module,
        Kind::Object => CodeType::Object,
        Kind::Package => CodeType::Package,
        Kind::Signature => CodeType::Signature,
        Kind::StaticVariable => CodeType::StaticVariable,
        Kind::Struct => CodeType::Struct,
        Kind::Trait => CodeType::Trait,
        Kind::TraitMethod => CodeType::TraitMethod,
        Kind::Type => CodeType::Type,
        Kind::TypeAlias => CodeType::TypeAlias,
        Kind::TypeClass => CodeType::TypeClass,
        Kind::TypeClassMethod => CodeType::TypeClassMethod,
        Kind::Union => CodeType::Union,
        _ => CodeType::Unknown,
    }
}
