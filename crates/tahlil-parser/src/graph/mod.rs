// Suffix graph: grammar states connected by suffixes.
//
// The graph is an arena. States, suffixes, forms and groups are stored in
// vectors and referenced by the ids in `crate::suffix`. It is built once,
// then shared read-only behind an `Arc`.

pub mod form_graph;
pub mod turkish;

use hashbrown::HashMap;
use tahlil_core::{PrimaryPos, Root, SecondaryPos};

use crate::error::GrammarError;
use crate::suffix::{
    FormConditions, FormId, GroupId, State, StateId, StateKind, Suffix, SuffixForm,
    SuffixFormSequence, SuffixId,
};

pub use form_graph::{FormEdge, FormGraph, FormNode};

/// An outgoing grammar edge: taking `suffix` leads to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarEdge {
    pub suffix: SuffixId,
    pub target: StateId,
}

#[derive(Debug, Default)]
pub struct SuffixGraph {
    states: Vec<State>,
    suffixes: Vec<Suffix>,
    forms: Vec<SuffixForm>,
    groups: Vec<String>,
    edges: Vec<Vec<GrammarEdge>>,

    state_index: HashMap<String, StateId>,
    suffix_index: HashMap<String, SuffixId>,
    group_index: HashMap<String, GroupId>,
    root_states: HashMap<(PrimaryPos, Option<SecondaryPos>), StateId>,
}

impl SuffixGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Building
    // -----------------------------------------------------------------------

    pub fn add_state(
        &mut self,
        name: &str,
        kind: StateKind,
        pos: PrimaryPos,
    ) -> Result<StateId, GrammarError> {
        if self.state_index.contains_key(name) {
            return Err(GrammarError::DuplicateState(name.to_string()));
        }
        let id = StateId(self.states.len() as u32);
        self.states.push(State {
            name: name.to_string(),
            kind,
            pos,
        });
        self.edges.push(Vec::new());
        self.state_index.insert(name.to_string(), id);
        Ok(id)
    }

    /// The group called `name`, created on first use.
    pub fn group(&mut self, name: &str) -> GroupId {
        if let Some(&id) = self.group_index.get(name) {
            return id;
        }
        let id = GroupId(self.groups.len() as u32);
        self.groups.push(name.to_string());
        self.group_index.insert(name.to_string(), id);
        id
    }

    pub fn add_suffix(
        &mut self,
        name: &str,
        pretty_name: Option<&str>,
        group: Option<GroupId>,
        allow_repetition: bool,
    ) -> Result<SuffixId, GrammarError> {
        if self.suffix_index.contains_key(name) {
            return Err(GrammarError::DuplicateSuffix(name.to_string()));
        }
        let id = SuffixId(self.suffixes.len() as u32);
        self.suffixes.push(Suffix {
            name: name.to_string(),
            pretty_name: pretty_name.map(str::to_string),
            group,
            allow_repetition,
            forms: Vec::new(),
        });
        self.suffix_index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Compile `template` and attach it to `suffix` as a new form.
    pub fn add_form(
        &mut self,
        suffix: SuffixId,
        template: &str,
        conditions: FormConditions,
    ) -> Result<FormId, GrammarError> {
        let sequence = SuffixFormSequence::compile(template)?;
        let id = FormId(self.forms.len() as u32);
        self.forms.push(SuffixForm {
            suffix,
            sequence,
            precondition: conditions.precondition,
            postcondition: conditions.postcondition,
            post_derivative_condition: conditions.post_derivative_condition,
        });
        self.suffixes[suffix.index()].forms.push(id);
        Ok(id)
    }

    pub fn add_edge(&mut self, from: StateId, suffix: SuffixId, to: StateId) {
        self.edges[from.index()].push(GrammarEdge { suffix, target: to });
    }

    /// Roots whose lexeme has `pos` (and `secondary`, when given) start in
    /// `state`.
    pub fn set_root_state(
        &mut self,
        pos: PrimaryPos,
        secondary: Option<SecondaryPos>,
        state: StateId,
    ) {
        self.root_states.insert((pos, secondary), state);
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn suffix(&self, id: SuffixId) -> &Suffix {
        &self.suffixes[id.index()]
    }

    pub fn form(&self, id: FormId) -> &SuffixForm {
        &self.forms[id.index()]
    }

    pub fn group_name(&self, id: GroupId) -> &str {
        &self.groups[id.index()]
    }

    pub fn edges(&self, state: StateId) -> &[GrammarEdge] {
        &self.edges[state.index()]
    }

    pub fn state_ids(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.states.len() as u32).map(StateId)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn suffix_count(&self) -> usize {
        self.suffixes.len()
    }

    pub fn form_count(&self) -> usize {
        self.forms.len()
    }

    pub fn state_id(&self, name: &str) -> Result<StateId, GrammarError> {
        self.state_index
            .get(name)
            .copied()
            .ok_or_else(|| GrammarError::UnknownState(name.to_string()))
    }

    pub fn suffix_id(&self, name: &str) -> Result<SuffixId, GrammarError> {
        self.suffix_index
            .get(name)
            .copied()
            .ok_or_else(|| GrammarError::UnknownSuffix(name.to_string()))
    }

    /// The single form of `suffix` whose template is `template`.
    pub fn find_form(&self, suffix: SuffixId, template: &str) -> Result<FormId, GrammarError> {
        let s = self.suffix(suffix);
        let mut matches = s
            .forms
            .iter()
            .copied()
            .filter(|&f| self.form(f).template() == template);
        match (matches.next(), matches.next()) {
            (Some(form), None) => Ok(form),
            (None, _) => Err(GrammarError::UnknownForm {
                suffix: s.name.clone(),
                template: template.to_string(),
            }),
            (Some(_), Some(_)) => Err(GrammarError::AmbiguousForm {
                suffix: s.name.clone(),
                template: template.to_string(),
            }),
        }
    }

    /// Default state for parts of speech without a secondary category.
    pub fn root_state_of(&self, pos: PrimaryPos) -> Result<StateId, GrammarError> {
        self.root_states
            .get(&(pos, None))
            .copied()
            .ok_or(GrammarError::NoRootState(pos))
    }

    /// The state a fresh parse of `root` starts in. A mapping for the
    /// lexeme's secondary part of speech wins over the plain one.
    pub fn root_state(&self, root: &Root) -> Result<StateId, GrammarError> {
        let lexeme = root.lexeme();
        let pos = lexeme.primary_pos();
        if let Some(secondary) = lexeme.secondary_pos() {
            if let Some(&state) = self.root_states.get(&(pos, Some(secondary))) {
                return Ok(state);
            }
        }
        self.root_state_of(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_graph() -> SuffixGraph {
        use PrimaryPos::Noun;
        use StateKind::{NonTerminal, Terminal};

        let mut g = SuffixGraph::new();
        let root = g.add_state("ROOT", NonTerminal, Noun).unwrap();
        let end = g.add_state("END", Terminal, Noun).unwrap();
        let cases = Some(g.group("Cases"));
        let dat = g.add_suffix("Dat", Some("Dat"), cases, false).unwrap();
        g.add_form(dat, "+yA", FormConditions::none()).unwrap();
        g.add_form(dat, "nA", FormConditions::none()).unwrap();
        g.add_edge(root, dat, end);
        g.set_root_state(PrimaryPos::Noun, None, root);
        g
    }

    #[test]
    fn lookups() {
        let g = small_graph();
        let root = g.state_id("ROOT").unwrap();
        let dat = g.suffix_id("Dat").unwrap();
        assert_eq!(g.edges(root).len(), 1);
        assert_eq!(g.edges(root)[0].suffix, dat);
        assert_eq!(g.suffix(dat).forms.len(), 2);
        assert_eq!(g.group_name(g.suffix(dat).group.unwrap()), "Cases");
        assert_eq!(g.state_count(), 2);
        assert_eq!(g.form_count(), 2);
        assert_eq!(g.root_state_of(PrimaryPos::Noun).unwrap(), root);
    }

    #[test]
    fn unknown_names_are_errors() {
        let g = small_graph();
        assert_eq!(
            g.state_id("NOPE"),
            Err(GrammarError::UnknownState("NOPE".into()))
        );
        assert_eq!(
            g.suffix_id("Acc"),
            Err(GrammarError::UnknownSuffix("Acc".into()))
        );
        assert_eq!(
            g.root_state_of(PrimaryPos::Verb),
            Err(GrammarError::NoRootState(PrimaryPos::Verb))
        );
    }

    #[test]
    fn form_lookup() {
        let mut g = small_graph();
        let dat = g.suffix_id("Dat").unwrap();
        assert!(g.find_form(dat, "nA").is_ok());
        assert!(matches!(
            g.find_form(dat, "dA"),
            Err(GrammarError::UnknownForm { .. })
        ));

        g.add_form(dat, "nA", FormConditions::none()).unwrap();
        assert!(matches!(
            g.find_form(dat, "nA"),
            Err(GrammarError::AmbiguousForm { .. })
        ));
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut g = small_graph();
        assert_eq!(
            g.add_state("ROOT", StateKind::Terminal, PrimaryPos::Noun),
            Err(GrammarError::DuplicateState("ROOT".into()))
        );
        assert_eq!(
            g.add_suffix("Dat", None, None, false),
            Err(GrammarError::DuplicateSuffix("Dat".into()))
        );
        let dat = g.suffix_id("Dat").unwrap();
        assert!(matches!(
            g.add_form(dat, "y+A", FormConditions::none()),
            Err(GrammarError::InvalidTemplate { .. })
        ));
    }
}
