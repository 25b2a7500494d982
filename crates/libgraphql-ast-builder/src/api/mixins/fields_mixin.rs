use crate::api::mixins::name_of;
use crate::api::mixins::named_collection_mixin;
use crate::api::mixins::HasArguments;
use crate::api::mixins::HasDirectives;
use crate::api::mixins::HasFields;
use crate::api::mixins::HasName;
use crate::api::mixins::HasType;
use crate::ast::DirectiveNode;
use crate::ast::NodeKinded;
use crate::ast::TypeNode;
use crate::build::Buildable;
use crate::build::Props;
use crate::crud;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

named_collection_mixin! {
    /// Arguments of a directive or field ([`ArgumentNode`]s), or argument
    /// definitions of a field or directive definition
    /// ([`InputValueDefinitionNode`]s).
    ///
    /// [`ArgumentNode`]: crate::ast::ArgumentNode
    /// [`InputValueDefinitionNode`]: crate::ast::InputValueDefinitionNode
    ArgumentsMixin<HasArguments>::arguments/arguments_mut => <N as HasArguments>::Argument,
    collection: "arguments",
    name_of: name_of::<<N as HasArguments>::Argument>,
    where: [<N as HasArguments>::Argument: HasName],
}

named_collection_mixin! {
    /// Fields of an object, interface or input object type (or extension).
    FieldsMixin<HasFields>::fields/fields_mut => <N as HasFields>::Field,
    collection: "fields",
    name_of: name_of::<<N as HasFields>::Field>,
    where: [<N as HasFields>::Field: HasName],
}

/// Read-throughs into individual fields. These fail with
/// [`AstBuildError::NotFound`] when the field does not exist.
impl<'a, N> FieldsMixin<'a, N>
where
    N: HasFields + NodeKinded,
    <N as HasFields>::Field: Buildable
        + Clone
        + HasDirectives
        + HasName
        + HasType
        + NodeKinded
        + serde::Serialize,
{
    fn field_or_fail(&self, action: &'static str, name: &str) -> Result<&<N as HasFields>::Field> {
        crud::find_in(self.node.fields(), name_of, name)
            .ok_or_else(|| crud::not_found(action, "fields", name, self.node.context()))
    }

    fn field_mut_or_fail(
        &mut self,
        action: &'static str,
        name: &str,
    ) -> Result<&mut <N as HasFields>::Field> {
        let parent = self.node.context();
        let fields = self.node.fields_mut();
        match crud::position_in(fields.as_slice(), name_of, name) {
            Some(idx) => Ok(&mut fields[idx]),
            None => Err(crud::not_found(action, "fields", name, parent)),
        }
    }

    pub fn field_type(&self, name: &str) -> Result<&TypeNode> {
        Ok(self.field_or_fail("get type of", name)?.type_ref())
    }

    /// The innermost named type of the field, e.g. `User` for `[User!]!`.
    pub fn field_typename(&self, name: &str) -> Result<&str> {
        Ok(self.field_or_fail("get type of", name)?.type_ref().typename())
    }

    /// Retargets the field's innermost named type, keeping its list and
    /// non-null wrappers.
    pub fn set_field_typename(&mut self, name: &str, typename: &str) -> Result<&mut Self> {
        let new_name = crate::build::name_node(typename)?;
        let field = self.field_mut_or_fail("set type of", name)?;
        field.type_ref_mut().named_type_mut().name = new_name;
        Ok(self)
    }

    pub fn set_field_type(
        &mut self,
        name: &str,
        type_props: impl Into<Props<TypeNode>>,
    ) -> Result<&mut Self> {
        let type_ = crate::build::type_node(type_props)?;
        let field = self.field_mut_or_fail("set type of", name)?;
        *field.type_ref_mut() = type_;
        Ok(self)
    }

    pub fn field_directives(&self, name: &str) -> Result<&[DirectiveNode]> {
        Ok(self.field_or_fail("get directives of", name)?.directives())
    }

    /// Fields whose innermost named type is `typename`, in order.
    pub fn by_typename(&self, typename: &str) -> Vec<&<N as HasFields>::Field> {
        self.node.fields()
            .iter()
            .filter(|field| field.type_ref().typename() == typename)
            .collect()
    }
}

impl<'a, N> FieldsMixin<'a, N>
where
    N: HasFields + NodeKinded,
    <N as HasFields>::Field: Buildable
        + Clone
        + HasArguments
        + HasDirectives
        + HasName
        + HasType
        + NodeKinded
        + serde::Serialize,
{
    pub fn field_arguments(
        &self,
        name: &str,
    ) -> Result<&[<<N as HasFields>::Field as HasArguments>::Argument]> {
        Ok(self.field_or_fail("get arguments of", name)?.arguments())
    }
}
