use crate::ast::ValueNode;

// =============================================================================
// Names and references
// =============================================================================

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "Name")]
pub struct NameNode {
    pub value: String,
}
impl NameNode {
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "Variable")]
pub struct VariableNode {
    pub name: NameNode,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "Argument")]
pub struct ArgumentNode {
    pub name: NameNode,
    pub value: ValueNode,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "Directive")]
pub struct DirectiveNode {
    pub name: NameNode,
    pub arguments: Vec<ArgumentNode>,
}

// =============================================================================
// Type references
// =============================================================================

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "NamedType")]
pub struct NamedTypeNode {
    pub name: NameNode,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "ListType")]
pub struct ListTypeNode {
    #[serde(rename = "type")]
    pub type_: Box<TypeNode>,
}

/// A non-null wrapper. The wrapped type is a [`NullableTypeNode`], so a
/// non-null type can never directly wrap another non-null type.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "NonNullType")]
pub struct NonNullTypeNode {
    #[serde(rename = "type")]
    pub type_: NullableTypeNode,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum NullableTypeNode {
    Named(NamedTypeNode),
    List(ListTypeNode),
}
impl NullableTypeNode {
    pub fn into_type_node(self) -> TypeNode {
        match self {
            Self::Named(named) => TypeNode::Named(named),
            Self::List(list) => TypeNode::List(list),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum TypeNode {
    Named(NamedTypeNode),
    List(ListTypeNode),
    NonNull(NonNullTypeNode),
}
impl TypeNode {
    /// The innermost named type, irrespective of list/non-null wrapping.
    pub fn named_type(&self) -> &NamedTypeNode {
        match self {
            Self::Named(named) => named,
            Self::List(list) => list.type_.named_type(),
            Self::NonNull(non_null) => match &non_null.type_ {
                NullableTypeNode::Named(named) => named,
                NullableTypeNode::List(list) => list.type_.named_type(),
            },
        }
    }

    pub fn named_type_mut(&mut self) -> &mut NamedTypeNode {
        match self {
            Self::Named(named) => named,
            Self::List(list) => list.type_.named_type_mut(),
            Self::NonNull(non_null) => match &mut non_null.type_ {
                NullableTypeNode::Named(named) => named,
                NullableTypeNode::List(list) => list.type_.named_type_mut(),
            },
        }
    }

    pub fn typename(&self) -> &str {
        self.named_type().name.as_str()
    }

    /// Strips one level of non-null wrapping (if any).
    pub fn into_nullable(self) -> NullableTypeNode {
        match self {
            Self::Named(named) => NullableTypeNode::Named(named),
            Self::List(list) => NullableTypeNode::List(list),
            Self::NonNull(non_null) => non_null.type_,
        }
    }

    pub fn nullable(&self) -> TypeNode {
        self.clone().into_nullable().into_type_node()
    }

    /// Wraps in a list type.
    pub fn into_list(self) -> TypeNode {
        TypeNode::List(ListTypeNode {
            type_: Box::new(self),
        })
    }

    /// Wraps in a non-null type. Already non-null types are returned as-is.
    pub fn into_non_null(self) -> TypeNode {
        match self {
            Self::NonNull(_) => self,
            Self::Named(named) => TypeNode::NonNull(NonNullTypeNode {
                type_: NullableTypeNode::Named(named),
            }),
            Self::List(list) => TypeNode::NonNull(NonNullTypeNode {
                type_: NullableTypeNode::List(list),
            }),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Whether a non-null wrapper appears at any level, e.g. `[User!]`.
    pub fn has_non_null(&self) -> bool {
        match self {
            Self::Named(_) => false,
            Self::List(list) => list.type_.has_non_null(),
            Self::NonNull(_) => true,
        }
    }

    /// Whether the type is a list once any outer non-null wrapper is
    /// stripped.
    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(non_null) => matches!(non_null.type_, NullableTypeNode::List(_)),
            Self::Named(_) => false,
        }
    }
}
impl std::fmt::Display for TypeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(named) => write!(f, "{}", named.name.value),
            Self::List(list) => write!(f, "[{}]", list.type_),
            Self::NonNull(non_null) => match &non_null.type_ {
                NullableTypeNode::Named(named) => {
                    write!(f, "{}!", named.name.value)
                },
                NullableTypeNode::List(list) => {
                    write!(f, "[{}]!", list.type_)
                },
            },
        }
    }
}
