// Predicates over a partial parse, attached to suffix forms as pre-,
// post- and post-derivative conditions.
//
// Conditions are plain closures combined with `&`, `|` and `!`.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use tahlil_core::LexemeAttribute;

use crate::container::MorphemeContainer;
use crate::suffix::SuffixId;

type Predicate = dyn Fn(&MorphemeContainer) -> bool + Send + Sync;

#[derive(Clone)]
pub struct Condition(Arc<Predicate>);

impl Condition {
    pub fn new(predicate: impl Fn(&MorphemeContainer) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    pub fn is_satisfied_by(&self, container: &MorphemeContainer) -> bool {
        (self.0)(container)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition(..)")
    }
}

impl BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Condition {
        Condition::new(move |c| self.is_satisfied_by(c) && rhs.is_satisfied_by(c))
    }
}

impl BitOr for Condition {
    type Output = Condition;

    fn bitor(self, rhs: Condition) -> Condition {
        Condition::new(move |c| self.is_satisfied_by(c) || rhs.is_satisfied_by(c))
    }
}

impl Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        Condition::new(move |c| !self.is_satisfied_by(c))
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

/// The suffix was taken since the last derivation boundary.
pub fn comes_after(suffix: SuffixId) -> Condition {
    Condition::new(move |c| c.suffixes_since_derivation().any(|s| s == suffix))
}

/// Any of the suffixes was taken since the last derivation boundary.
pub fn comes_after_any(suffixes: &[SuffixId]) -> Condition {
    let suffixes = suffixes.to_vec();
    Condition::new(move |c| c.suffixes_since_derivation().any(|s| suffixes.contains(&s)))
}

/// The last derivation was made with `suffix`.
pub fn comes_after_derivation(suffix: SuffixId) -> Condition {
    Condition::new(move |c| {
        c.last_derivation()
            .is_some_and(|t| t.application.suffix == suffix)
    })
}

/// The last transition taken used `suffix`. Meant for postconditions,
/// which run after the following transition has been added.
pub fn followed_by(suffix: SuffixId) -> Condition {
    Condition::new(move |c| {
        c.last_transition()
            .is_some_and(|t| t.application.suffix == suffix)
    })
}

/// The current lexeme attribute view has `attribute`.
pub fn has_lexeme_attribute(attribute: LexemeAttribute) -> Condition {
    Condition::new(move |c| c.lexeme_attributes().contains(attribute))
}

/// The root's lexeme has `attribute`, whatever has been appended since.
pub fn root_has_attribute(attribute: LexemeAttribute) -> Condition {
    Condition::new(move |c| c.root().lexeme().has_attribute(attribute))
}

/// The root's lexeme has its lemma root among `lemma_roots`.
pub fn applies_to_root(lemma_roots: &[&str]) -> Condition {
    let lemma_roots: Vec<String> = lemma_roots.iter().map(|s| s.to_string()).collect();
    Condition::new(move |c| {
        let root = c.root().lexeme().lemma_root();
        lemma_roots.iter().any(|r| r == root)
    })
}

/// At least one derivation has been made.
pub fn has_derivation() -> Condition {
    Condition::new(|c| c.last_derivation().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tahlil_core::{Lexeme, PrimaryPos, Root, TurkishSequence};

    use crate::container::MorphemeContainer;
    use crate::suffix::StateId;

    fn container(lemma: &str, attrs: &[LexemeAttribute]) -> MorphemeContainer {
        let lexeme = Arc::new(Lexeme::dynamic(
            lemma,
            lemma,
            PrimaryPos::Noun,
            None,
            attrs.iter().copied().collect(),
        ));
        let root = Root::dynamic(TurkishSequence::new(lemma), lexeme);
        MorphemeContainer::new(root, StateId(0), TurkishSequence::empty())
    }

    #[test]
    fn combinators() {
        let c = container("ev", &[LexemeAttribute::NoVoicing]);
        let yes = Condition::new(|_| true);
        let no = Condition::new(|_| false);

        assert!((yes.clone() & yes.clone()).is_satisfied_by(&c));
        assert!(!(yes.clone() & no.clone()).is_satisfied_by(&c));
        assert!((yes.clone() | no.clone()).is_satisfied_by(&c));
        assert!(!(no.clone() | no.clone()).is_satisfied_by(&c));
        assert!((!no).is_satisfied_by(&c));
        assert!(!(!yes).is_satisfied_by(&c));
    }

    #[test]
    fn root_conditions() {
        let c = container("ev", &[LexemeAttribute::NoVoicing]);
        assert!(root_has_attribute(LexemeAttribute::NoVoicing).is_satisfied_by(&c));
        assert!(!root_has_attribute(LexemeAttribute::Voicing).is_satisfied_by(&c));
        assert!(has_lexeme_attribute(LexemeAttribute::NoVoicing).is_satisfied_by(&c));
        assert!(applies_to_root(&["ev", "kapı"]).is_satisfied_by(&c));
        assert!(!applies_to_root(&["kapı"]).is_satisfied_by(&c));
    }

    #[test]
    fn fresh_container_has_no_history() {
        let c = container("ev", &[]);
        assert!(!has_derivation().is_satisfied_by(&c));
        assert!(!comes_after(SuffixId(0)).is_satisfied_by(&c));
        assert!(!comes_after_any(&[SuffixId(0), SuffixId(1)]).is_satisfied_by(&c));
        assert!(!comes_after_derivation(SuffixId(0)).is_satisfied_by(&c));
        assert!(!followed_by(SuffixId(0)).is_satisfied_by(&c));
    }
}
