// Suffix model: grammar states, suffixes, suffix forms and resolved
// applications of a form.
//
// Everything here lives in the arena owned by `SuffixGraph` and is referred
// to by index, so containers and form-graph edges stay small and `Copy`.

pub mod condition;
pub mod form_sequence;

use tahlil_core::{PhoneticExpectation, PrimaryPos, TurkishSequence};

pub use condition::Condition;
pub use form_sequence::{Rule, SuffixFormSequence};

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) u32);

        impl $name {
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(
    /// Index of a [`State`] in its suffix graph.
    StateId
);
arena_id!(
    /// Index of a [`Suffix`] in its suffix graph.
    SuffixId
);
arena_id!(
    /// Index of a [`SuffixForm`] in its suffix graph.
    FormId
);
arena_id!(
    /// Index of a suffix group in its suffix graph.
    GroupId
);

// ---------------------------------------------------------------------------
// States
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// A word may end here.
    Terminal,
    /// Leaving this state starts a new derivation.
    Derivational,
    /// Passes straight through to another state.
    Transfer,
    NonTerminal,
}

#[derive(Debug, Clone)]
pub struct State {
    pub name: String,
    pub kind: StateKind,
    pub pos: PrimaryPos,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        self.kind == StateKind::Terminal
    }

    pub fn is_derivational(&self) -> bool {
        self.kind == StateKind::Derivational
    }

    /// Name used when a derivation is printed: the part of speech tag.
    pub fn pretty(&self) -> &'static str {
        self.pos.tag()
    }
}

// ---------------------------------------------------------------------------
// Suffixes and forms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Suffix {
    pub name: String,
    /// Printed name. `None` marks a free transition that is left out of
    /// formatted output.
    pub pretty_name: Option<String>,
    pub group: Option<GroupId>,
    pub allow_repetition: bool,
    pub forms: Vec<FormId>,
}

impl Suffix {
    pub fn is_free(&self) -> bool {
        self.pretty_name.is_none()
    }
}

/// Gates attached to a suffix form.
#[derive(Clone, Default)]
pub struct FormConditions {
    /// Must hold on the container before the form is applied.
    pub precondition: Option<Condition>,
    /// Must hold on the container after the next transition is taken.
    pub postcondition: Option<Condition>,
    /// Must hold once the derivation this form belongs to is left.
    pub post_derivative_condition: Option<Condition>,
}

impl FormConditions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn pre(condition: Condition) -> Self {
        Self {
            precondition: Some(condition),
            ..Self::default()
        }
    }

    pub fn post(condition: Condition) -> Self {
        Self {
            postcondition: Some(condition),
            ..Self::default()
        }
    }

    pub fn with_post(mut self, condition: Condition) -> Self {
        self.postcondition = Some(condition);
        self
    }

    pub fn with_post_derivative(mut self, condition: Condition) -> Self {
        self.post_derivative_condition = Some(condition);
        self
    }
}

impl From<Condition> for FormConditions {
    fn from(condition: Condition) -> Self {
        Self::pre(condition)
    }
}

/// One concrete spelling template of a suffix.
#[derive(Clone)]
pub struct SuffixForm {
    pub suffix: SuffixId,
    pub sequence: SuffixFormSequence,
    pub precondition: Option<Condition>,
    pub postcondition: Option<Condition>,
    pub post_derivative_condition: Option<Condition>,
}

impl SuffixForm {
    pub fn template(&self) -> &str {
        self.sequence.template()
    }

    pub fn is_blank(&self) -> bool {
        self.sequence.is_blank()
    }
}

impl std::fmt::Debug for SuffixForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuffixForm")
            .field("suffix", &self.suffix)
            .field("template", &self.sequence.template())
            .field("precondition", &self.precondition.is_some())
            .field("postcondition", &self.postcondition.is_some())
            .field(
                "post_derivative_condition",
                &self.post_derivative_condition.is_some(),
            )
            .finish()
    }
}

/// A suffix form resolved against a concrete surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormApplication {
    pub form: FormId,
    pub suffix: SuffixId,
    /// What was appended to the surface.
    pub applied: TurkishSequence,
    /// The plain resolution of the template. Differs from `applied` only
    /// in voiced variants, where the last letter of `applied` is voiced.
    pub fitting: TurkishSequence,
    /// Constraint this application puts on the next non-blank form.
    pub expectation: Option<PhoneticExpectation>,
}

impl FormApplication {
    pub fn is_blank(&self) -> bool {
        self.applied.is_blank()
    }
}
