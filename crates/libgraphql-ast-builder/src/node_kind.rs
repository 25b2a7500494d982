macro_rules! node_kinds {
    ($($variant:ident),* $(,)?) => {
        /// The discriminant tag carried by every node in the document tree.
        ///
        /// Tags use the same spelling as the `kind` field of a canonical
        /// (serialized) node, e.g. `"ObjectTypeDefinition"`.
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum NodeKind {
            $($variant,)*
        }
        impl NodeKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[
                $(NodeKind::$variant,)*
            ];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }

            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $(stringify!($variant) => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

node_kinds! {
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
}

impl NodeKind {
    /// The leaf dispatch family this kind is registered under, if any.
    ///
    /// `TypeSystemDefinition` and `TypeSystemExtension` only list the kinds
    /// registered directly in those tables; the type definitions and type
    /// extensions they also cover are merged in from their own families.
    pub fn family(&self) -> Option<KindFamily> {
        match self {
            Self::ScalarTypeDefinition
            | Self::ObjectTypeDefinition
            | Self::InterfaceTypeDefinition
            | Self::UnionTypeDefinition
            | Self::EnumTypeDefinition
            | Self::InputObjectTypeDefinition => Some(KindFamily::TypeDefinition),

            Self::ScalarTypeExtension
            | Self::ObjectTypeExtension
            | Self::InterfaceTypeExtension
            | Self::UnionTypeExtension
            | Self::EnumTypeExtension
            | Self::InputObjectTypeExtension => Some(KindFamily::TypeExtension),

            Self::SchemaDefinition
            | Self::DirectiveDefinition => Some(KindFamily::TypeSystemDefinition),

            Self::SchemaExtension => Some(KindFamily::TypeSystemExtension),

            Self::OperationDefinition
            | Self::FragmentDefinition => Some(KindFamily::ExecutableDefinition),

            Self::Field
            | Self::FragmentSpread
            | Self::InlineFragment => Some(KindFamily::Selection),

            Self::Variable
            | Self::IntValue
            | Self::FloatValue
            | Self::StringValue
            | Self::BooleanValue
            | Self::NullValue
            | Self::EnumValue
            | Self::ListValue
            | Self::ObjectValue => Some(KindFamily::Value),

            Self::NamedType
            | Self::ListType
            | Self::NonNullType => Some(KindFamily::Type),

            Self::Name
            | Self::Document
            | Self::VariableDefinition
            | Self::SelectionSet
            | Self::Argument
            | Self::ObjectField
            | Self::Directive
            | Self::OperationTypeDefinition
            | Self::FieldDefinition
            | Self::InputValueDefinition
            | Self::EnumValueDefinition => None,
        }
    }
}
impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Groups of [`NodeKind`]s that share a leaf dispatch table.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KindFamily {
    ExecutableDefinition,
    Selection,
    Type,
    TypeDefinition,
    TypeExtension,
    TypeSystemDefinition,
    TypeSystemExtension,
    Value,
}
impl KindFamily {
    pub fn kinds(&self) -> Vec<NodeKind> {
        NodeKind::ALL.iter()
            .copied()
            .filter(|kind| kind.family() == Some(*self))
            .collect()
    }
}
