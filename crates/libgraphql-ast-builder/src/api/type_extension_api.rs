use crate::api::narrowing;
use crate::api::node_api;
use crate::ast::EnumTypeExtensionNode;
use crate::ast::InputObjectTypeExtensionNode;
use crate::ast::InterfaceTypeExtensionNode;
use crate::ast::ObjectTypeExtensionNode;
use crate::ast::ScalarTypeExtensionNode;
use crate::ast::TypeExtensionNode;
use crate::ast::UnionTypeExtensionNode;

node_api! {
    /// `extend type User { ... }`
    ObjectTypeExtApi => ObjectTypeExtensionNode {
        name: NameMixin,
        directives: DirectivesMixin,
        fields: FieldsMixin,
        interfaces: InterfacesMixin,
    }
}

node_api! {
    InterfaceTypeExtApi => InterfaceTypeExtensionNode {
        name: NameMixin,
        directives: DirectivesMixin,
        fields: FieldsMixin,
        interfaces: InterfacesMixin,
    }
}

node_api! {
    UnionTypeExtApi => UnionTypeExtensionNode {
        name: NameMixin,
        directives: DirectivesMixin,
        members: UnionMembersMixin,
    }
}

node_api! {
    ScalarTypeExtApi => ScalarTypeExtensionNode {
        name: NameMixin,
        directives: DirectivesMixin,
    }
}

node_api! {
    EnumTypeExtApi => EnumTypeExtensionNode {
        name: NameMixin,
        directives: DirectivesMixin,
        values: EnumValuesMixin,
    }
}

node_api! {
    InputTypeExtApi => InputObjectTypeExtensionNode {
        name: NameMixin,
        directives: DirectivesMixin,
        fields: FieldsMixin,
    }
}

node_api! {
    /// Any type extension, before narrowing to its concrete kind.
    TypeExtensionApi => TypeExtensionNode {
        name: NameMixin,
        directives: DirectivesMixin,
    }
}

narrowing!(TypeExtensionApi over TypeExtensionNode {
    Object => is_object_type_ext / into_object_type_ext
        -> ObjectTypeExtApi as ObjectTypeExtension,
    Interface => is_interface_type_ext / into_interface_type_ext
        -> InterfaceTypeExtApi as InterfaceTypeExtension,
    Union => is_union_type_ext / into_union_type_ext
        -> UnionTypeExtApi as UnionTypeExtension,
    Scalar => is_scalar_type_ext / into_scalar_type_ext
        -> ScalarTypeExtApi as ScalarTypeExtension,
    Enum => is_enum_type_ext / into_enum_type_ext
        -> EnumTypeExtApi as EnumTypeExtension,
    InputObject => is_input_type_ext / into_input_type_ext
        -> InputTypeExtApi as InputObjectTypeExtension,
});
