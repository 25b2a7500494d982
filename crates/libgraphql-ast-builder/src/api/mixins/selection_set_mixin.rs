use crate::api::mixins::HasSelectionSet;
use crate::ast::FieldNode;
use crate::ast::FragmentSpreadNode;
use crate::ast::NodeKinded;
use crate::ast::SelectionNode;
use crate::build::field_node;
use crate::build::fragment_spread_node;
use crate::build::Props;
use crate::crud;
use crate::crud::Crud;
use crate::AstBuildError;
use crate::NodeKind;

type Result<T> = std::result::Result<T, AstBuildError>;

/// Fields are keyed by response name (alias if present, name otherwise);
/// fragment spreads and inline fragments have no field key.
fn field_key(selection: &SelectionNode) -> Option<&str> {
    match selection {
        SelectionNode::Field(field) => Some(field.response_name()),
        _ => None,
    }
}

fn spread_key(selection: &SelectionNode) -> Option<&str> {
    match selection {
        SelectionNode::FragmentSpread(spread) => Some(spread.name.as_str()),
        _ => None,
    }
}

fn field_selection(props: Props<SelectionNode>) -> Result<SelectionNode> {
    match props {
        Props::Node(SelectionNode::Field(field)) => Ok(SelectionNode::Field(field)),
        Props::Node(other) => Err(AstBuildError::KindMismatch {
            expected: NodeKind::Field,
            actual: other.kind(),
        }),
        Props::Raw(raw) => Ok(SelectionNode::Field(field_node(raw)?)),
    }
}

fn spread_selection(props: Props<SelectionNode>) -> Result<SelectionNode> {
    match props {
        Props::Node(SelectionNode::FragmentSpread(spread)) => {
            Ok(SelectionNode::FragmentSpread(spread))
        },
        Props::Node(other) => Err(AstBuildError::KindMismatch {
            expected: NodeKind::FragmentSpread,
            actual: other.kind(),
        }),
        Props::Raw(raw) => Ok(SelectionNode::FragmentSpread(fragment_spread_node(raw)?)),
    }
}

fn into_field(selection: SelectionNode) -> Result<FieldNode> {
    match selection {
        SelectionNode::Field(field) => Ok(field),
        other => Err(AstBuildError::KindMismatch {
            expected: NodeKind::Field,
            actual: other.kind(),
        }),
    }
}

/// The selections of an operation, fragment, inline fragment or field.
#[derive(Debug)]
pub struct SelectionSetMixin<'a, N> {
    node: &'a mut N,
}
impl<'a, N: HasSelectionSet + NodeKinded> SelectionSetMixin<'a, N> {
    pub fn new(node: &'a mut N) -> Self {
        Self { node }
    }

    /// `false` only for leaf fields that have no selection set at all.
    pub fn has_selection_set(&self) -> bool {
        self.node.selection_set().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.selections_ref().is_empty()
    }

    pub fn selections(self) -> &'a [SelectionNode] {
        let node: &'a N = self.node;
        node.selection_set()
            .map(|selection_set| selection_set.selections.as_slice())
            .unwrap_or_default()
    }

    fn selections_ref(&self) -> &[SelectionNode] {
        self.node.selection_set()
            .map(|selection_set| selection_set.selections.as_slice())
            .unwrap_or_default()
    }

    /// Runs a mutation that may have to create the selection set of a leaf
    /// field, and drops that selection set again when the mutation fails.
    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let was_leaf = !self.has_selection_set();
        let result = op(self);
        if was_leaf && result.is_err() {
            self.node.clear_selection_set();
        }
        result
    }

    fn crud(
        &mut self,
        name_of: crud::NameOf<SelectionNode>,
        constructor: crud::Constructor<SelectionNode>,
    ) -> Crud<'_, SelectionNode> {
        Crud::new(
            self.node.context(),
            "selections",
            &mut self.node.selection_set_mut().selections,
            name_of,
            constructor,
        )
    }

    // ─── Fields ─────────────────────────────────────────────────────────────

    pub fn field_names(&self) -> Vec<String> {
        crud::names_in(self.selections_ref(), field_key)
    }

    pub fn has_field(&self, response_name: &str) -> bool {
        crud::position_in(self.selections_ref(), field_key, response_name).is_some()
    }

    pub fn get_field(self, response_name: &str) -> Result<&'a FieldNode> {
        let parent = self.node.context();
        let node: &'a N = self.node;
        node.selection_set()
            .and_then(|selection_set| {
                crud::find_in(selection_set.selections.as_slice(), field_key, response_name)
            })
            .and_then(SelectionNode::as_field)
            .ok_or_else(|| crud::not_found("get", "selections", response_name, parent))
    }

    pub fn get_field_mut(self, response_name: &str) -> Result<&'a mut FieldNode> {
        let node: &'a mut N = self.node;
        let parent = node.context();
        if node.selection_set().is_none() {
            return Err(crud::not_found("get", "selections", response_name, parent));
        }
        let selection = Crud::new(
            parent,
            "selections",
            &mut node.selection_set_mut().selections,
            field_key,
            field_selection,
        ).find_or_fail_mut(response_name)?;
        match selection {
            SelectionNode::Field(field) => Ok(field),
            other => Err(AstBuildError::KindMismatch {
                expected: NodeKind::Field,
                actual: other.kind(),
            }),
        }
    }

    pub fn create_field(&mut self, props: impl Into<Props<FieldNode>>) -> Result<&mut Self> {
        self.mutate(|this| {
            this.crud(field_key, field_selection)
                .create(props.into().map(SelectionNode::Field))
                .map(|_| ())
        })?;
        Ok(self)
    }

    pub fn update_field(
        &mut self,
        response_name: &str,
        partial: impl Into<Props<FieldNode>>,
    ) -> Result<&mut Self> {
        self.mutate(|this| {
            this.crud(field_key, field_selection)
                .update(response_name, partial.into().map(SelectionNode::Field))
                .map(|_| ())
        })?;
        Ok(self)
    }

    pub fn upsert_field(&mut self, props: impl Into<Props<FieldNode>>) -> Result<&mut Self> {
        self.mutate(|this| {
            this.crud(field_key, field_selection)
                .upsert(props.into().map(SelectionNode::Field))
                .map(|_| ())
        })?;
        Ok(self)
    }

    pub fn remove_field(&mut self, response_name: &str) -> Result<FieldNode> {
        self.mutate(|this| this.crud(field_key, field_selection).remove(response_name))
            .and_then(into_field)
    }

    // ─── Fragment spreads ───────────────────────────────────────────────────

    pub fn fragment_spread_names(&self) -> Vec<String> {
        crud::names_in(self.selections_ref(), spread_key)
    }

    pub fn has_fragment_spread(&self, name: &str) -> bool {
        crud::position_in(self.selections_ref(), spread_key, name).is_some()
    }

    pub fn create_fragment_spread(
        &mut self,
        props: impl Into<Props<FragmentSpreadNode>>,
    ) -> Result<&mut Self> {
        self.mutate(|this| {
            this.crud(spread_key, spread_selection)
                .create(props.into().map(SelectionNode::FragmentSpread))
                .map(|_| ())
        })?;
        Ok(self)
    }

    pub fn remove_fragment_spread(&mut self, name: &str) -> Result<&mut Self> {
        self.mutate(|this| this.crud(spread_key, spread_selection).remove(name).map(|_| ()))?;
        Ok(self)
    }
}
